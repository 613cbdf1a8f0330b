use crate::models::issue::IssueId;
use crate::models::map::MapViewport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Split,
    List,
    Map,
}

impl Layout {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "split" => Some(Layout::Split),
            "list" => Some(Layout::List),
            "map" => Some(Layout::Map),
            _ => None,
        }
    }
}

/// Per-session presentation state. Updated only through [`ViewState::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub dark_mode: bool,
    pub layout: Layout,
    pub report_open: bool,
    pub selected_issue: Option<IssueId>,
    pub map: MapViewport,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewAction {
    ToggleDarkMode,
    SetLayout(Layout),
    OpenReport,
    CloseReport,
    SelectIssue(Option<IssueId>),
    ClickPin(IssueId),
    ClosePopup,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleHeatmap,
}

impl ViewState {
    pub fn apply(self, action: ViewAction) -> ViewState {
        match action {
            ViewAction::ToggleDarkMode => ViewState {
                dark_mode: !self.dark_mode,
                ..self
            },
            ViewAction::SetLayout(layout) => ViewState { layout, ..self },
            ViewAction::OpenReport => ViewState {
                report_open: true,
                ..self
            },
            ViewAction::CloseReport => ViewState {
                report_open: false,
                ..self
            },
            ViewAction::SelectIssue(selected_issue) => ViewState {
                selected_issue,
                ..self
            },
            ViewAction::ClickPin(id) => {
                let map = self.map.click_pin(id);
                // Closing a popup leaves the list selection alone.
                let selected_issue = if map.popup.is_some() {
                    Some(id)
                } else {
                    self.selected_issue
                };
                ViewState {
                    map,
                    selected_issue,
                    ..self
                }
            }
            ViewAction::ClosePopup => ViewState {
                map: self.map.close_popup(),
                selected_issue: None,
                ..self
            },
            ViewAction::ZoomIn => ViewState {
                map: self.map.zoom_in(),
                ..self
            },
            ViewAction::ZoomOut => ViewState {
                map: self.map.zoom_out(),
                ..self
            },
            ViewAction::ResetZoom => ViewState {
                map: self.map.reset_zoom(),
                ..self
            },
            ViewAction::ToggleHeatmap => ViewState {
                map: self.map.toggle_heatmap(),
                ..self
            },
        }
    }
}
