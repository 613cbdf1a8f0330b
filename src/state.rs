use crate::analysis::endorsement::EndorsementTracker;
use crate::commands::settings::EffectiveDashboardSettings;
use crate::error::DashboardError;
use crate::models::filter::FilterSelection;
use crate::models::view::ViewState;
use crate::store::{IssueStore, MemoryIssueStore};
use crate::wizard::ReportWizard;
use std::sync::{Arc, Mutex, MutexGuard};

/// Everything the dashboard keeps for the active viewer session.
pub struct DashboardState {
    pub store: Box<dyn IssueStore>,
    pub endorsements: EndorsementTracker,
    pub view: ViewState,
    /// Last selection the list was filtered with.
    pub selection: FilterSelection,
    pub wizard: ReportWizard,
}

impl DashboardState {
    pub fn new(store: Box<dyn IssueStore>) -> Self {
        Self {
            store,
            endorsements: EndorsementTracker::new(),
            view: ViewState::default(),
            selection: FilterSelection::default(),
            wizard: ReportWizard::new(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Box::new(MemoryIssueStore::seeded()))
    }

    /// Starts the session from saved preferences.
    pub fn apply_settings(&mut self, settings: &EffectiveDashboardSettings) {
        self.view = settings.initial_view();
        self.selection = settings.initial_selection();
    }
}

pub type SharedState = Arc<Mutex<DashboardState>>;

pub fn shared(state: DashboardState) -> SharedState {
    Arc::new(Mutex::new(state))
}

pub fn lock(state: &SharedState) -> Result<MutexGuard<'_, DashboardState>, DashboardError> {
    state.lock().map_err(|_| DashboardError::StateUnavailable)
}
