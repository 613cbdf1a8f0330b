use crate::models::issue::IssueId;
use serde::{Deserialize, Serialize};

pub const MAP_WIDTH: f64 = 640.0;
pub const MAP_HEIGHT: f64 = 480.0;

pub const MIN_ZOOM: f64 = 0.6;
pub const MAX_ZOOM: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.2;

/// A point in the abstract 640x480 map space handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const CENTER: MapPoint = MapPoint {
        x: MAP_WIDTH / 2.0,
        y: MAP_HEIGHT / 2.0,
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Keeps a user-picked point inside the drawable area.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, MAP_WIDTH),
            y: self.y.clamp(0.0, MAP_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub zoom: f64,
    pub heatmap: bool,
    pub popup: Option<IssueId>,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            heatmap: true,
            popup: None,
        }
    }
}

impl MapViewport {
    pub fn zoom_in(self) -> Self {
        self.with_zoom(self.zoom + ZOOM_STEP)
    }

    pub fn zoom_out(self) -> Self {
        self.with_zoom(self.zoom - ZOOM_STEP)
    }

    pub fn reset_zoom(self) -> Self {
        self.with_zoom(1.0)
    }

    pub fn toggle_heatmap(self) -> Self {
        Self {
            heatmap: !self.heatmap,
            ..self
        }
    }

    /// Clicking the pin whose popup is open closes it; any other pin opens its own.
    pub fn click_pin(self, id: IssueId) -> Self {
        let popup = if self.popup == Some(id) { None } else { Some(id) };
        Self { popup, ..self }
    }

    pub fn close_popup(self) -> Self {
        Self {
            popup: None,
            ..self
        }
    }

    pub fn with_zoom(self, zoom: f64) -> Self {
        // Snap to tenths so repeated steps do not accumulate float error.
        let snapped = (zoom * 10.0).round() / 10.0;
        Self {
            zoom: snapped.clamp(MIN_ZOOM, MAX_ZOOM),
            ..self
        }
    }
}
