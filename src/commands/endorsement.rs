use crate::analysis::endorsement::EndorsementToggle;
use crate::models::issue::IssueId;
use crate::state::{lock, DashboardState, SharedState};

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn toggle_endorsement(
    id: IssueId,
    state: tauri::State<'_, SharedState>,
) -> Result<EndorsementToggle, String> {
    toggle_endorsement_internal(state.inner(), id)
}

pub fn toggle_endorsement_internal(
    state: &SharedState,
    id: IssueId,
) -> Result<EndorsementToggle, String> {
    let mut guard = lock(state).map_err(|e| e.to_string())?;
    let DashboardState {
        store,
        endorsements,
        ..
    } = &mut *guard;

    let toggled = endorsements
        .toggle(store.as_mut(), id)
        .map_err(|e| e.to_string())?;
    log::debug!(
        "issue {id} endorsed = {} (votes {})",
        toggled.endorsed,
        toggled.votes
    );
    Ok(toggled)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_endorsements(state: tauri::State<'_, SharedState>) -> Result<Vec<IssueId>, String> {
    get_endorsements_internal(state.inner())
}

pub fn get_endorsements_internal(state: &SharedState) -> Result<Vec<IssueId>, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    Ok(lock.endorsements.endorsed_ids())
}
