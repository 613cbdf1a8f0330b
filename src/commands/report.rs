use crate::analysis::metrics::compute_metrics;
use crate::models::report::{ReportForm, ReportSubmission, WizardView};
use crate::models::view::ViewAction;
use crate::state::{lock, DashboardState, SharedState};
use chrono::{DateTime, Utc};

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_report_wizard(state: tauri::State<'_, SharedState>) -> Result<WizardView, String> {
    get_report_wizard_internal(state.inner())
}

pub fn get_report_wizard_internal(state: &SharedState) -> Result<WizardView, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    Ok(lock.wizard.view(Vec::new()))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn update_report_form(
    form: ReportForm,
    state: tauri::State<'_, SharedState>,
) -> Result<WizardView, String> {
    update_report_form_internal(state.inner(), form)
}

pub fn update_report_form_internal(state: &SharedState, form: ReportForm) -> Result<WizardView, String> {
    let mut lock = lock(state).map_err(|e| e.to_string())?;
    lock.wizard.form = form;
    Ok(lock.wizard.view(Vec::new()))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn advance_report_step(state: tauri::State<'_, SharedState>) -> Result<WizardView, String> {
    advance_report_step_internal(state.inner())
}

/// A blocked step stays put and comes back with its field errors.
pub fn advance_report_step_internal(state: &SharedState) -> Result<WizardView, String> {
    let mut lock = lock(state).map_err(|e| e.to_string())?;
    let errors = lock.wizard.advance().err().unwrap_or_default();
    Ok(lock.wizard.view(errors))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn back_report_step(state: tauri::State<'_, SharedState>) -> Result<WizardView, String> {
    back_report_step_internal(state.inner())
}

pub fn back_report_step_internal(state: &SharedState) -> Result<WizardView, String> {
    let mut lock = lock(state).map_err(|e| e.to_string())?;
    lock.wizard.back();
    Ok(lock.wizard.view(Vec::new()))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn submit_report(state: tauri::State<'_, SharedState>) -> Result<ReportSubmission, String> {
    submit_report_internal(state.inner(), Utc::now())
}

/// Files the wizard's form. Field errors come back as
/// `ReportSubmission::Rejected`, not as `Err`; acceptance resets the wizard
/// and closes the report modal.
pub fn submit_report_internal(
    state: &SharedState,
    now: DateTime<Utc>,
) -> Result<ReportSubmission, String> {
    let mut guard = lock(state).map_err(|e| e.to_string())?;
    let DashboardState {
        store,
        wizard,
        view,
        ..
    } = &mut *guard;

    let expected_response_days = compute_metrics(&store.list(), now).avg_response_days;
    let submission = wizard.submit(store.as_mut(), expected_response_days);
    if let ReportSubmission::Accepted { receipt } = &submission {
        log::info!("report filed under protocol {}", receipt.protocol);
        wizard.reset();
        *view = view.apply(ViewAction::CloseReport);
    }
    Ok(submission)
}
