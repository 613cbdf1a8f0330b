use crate::models::view::{ViewAction, ViewState};
use crate::state::{lock, SharedState};

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_view_state(state: tauri::State<'_, SharedState>) -> Result<ViewState, String> {
    get_view_state_internal(state.inner())
}

pub fn get_view_state_internal(state: &SharedState) -> Result<ViewState, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    Ok(lock.view)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn apply_view_action(
    action: ViewAction,
    state: tauri::State<'_, SharedState>,
) -> Result<ViewState, String> {
    apply_view_action_internal(state.inner(), action)
}

pub fn apply_view_action_internal(state: &SharedState, action: ViewAction) -> Result<ViewState, String> {
    let mut lock = lock(state).map_err(|e| e.to_string())?;
    lock.view = lock.view.apply(action);
    Ok(lock.view)
}
