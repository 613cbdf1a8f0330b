use crate::analysis::metrics::compute_metrics;
use crate::models::metrics::DashboardMetrics;
use crate::state::{lock, SharedState};
use chrono::{DateTime, Utc};

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_dashboard_metrics(
    state: tauri::State<'_, SharedState>,
) -> Result<DashboardMetrics, String> {
    get_dashboard_metrics_internal(state.inner(), Utc::now())
}

pub fn get_dashboard_metrics_internal(
    state: &SharedState,
    now: DateTime<Utc>,
) -> Result<DashboardMetrics, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    Ok(compute_metrics(&lock.store.list(), now))
}
