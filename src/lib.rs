pub mod analysis;
pub mod auth;
pub mod commands;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
pub mod wizard;

#[cfg(feature = "desktop")]
use auth::{AuthContext, AuthProvider};
#[cfg(feature = "desktop")]
use commands::{
    auth::{get_auth_state, request_email_link, sign_out},
    catalog::{
        advance_status, filter_issues, get_filter_selection, get_heat_spots, get_issue,
        get_vocabularies, list_issues, rank_issues, set_days_open,
    },
    endorsement::{get_endorsements, toggle_endorsement},
    metrics::get_dashboard_metrics,
    report::{
        advance_report_step, back_report_step, get_report_wizard, submit_report,
        update_report_form,
    },
    settings::{get_settings, load_effective_settings, save_settings},
    view::{apply_view_action, get_view_state},
};
#[cfg(feature = "desktop")]
use state::{shared, DashboardState};
#[cfg(feature = "desktop")]
use std::sync::Arc;

#[cfg(feature = "desktop")]
pub fn run(provider: Arc<dyn AuthProvider>) {
    use tauri::Manager;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let auth = tauri::async_runtime::block_on(AuthContext::connect(provider));

    let result = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let mut dashboard = DashboardState::seeded();
            if let Ok(home) = app.path().home_dir() {
                match load_effective_settings(&home.to_string_lossy()) {
                    Ok(settings) => dashboard.apply_settings(&settings),
                    Err(e) => log::warn!("falling back to default view: {e}"),
                }
            }
            app.manage(shared(dashboard));
            Ok(())
        })
        .manage(auth)
        .invoke_handler(tauri::generate_handler![
            list_issues,
            filter_issues,
            get_filter_selection,
            rank_issues,
            get_issue,
            advance_status,
            set_days_open,
            get_heat_spots,
            get_vocabularies,
            toggle_endorsement,
            get_endorsements,
            get_dashboard_metrics,
            get_report_wizard,
            update_report_form,
            advance_report_step,
            back_report_step,
            submit_report,
            get_view_state,
            apply_view_action,
            get_auth_state,
            request_email_link,
            sign_out,
            get_settings,
            save_settings,
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        log::error!("error while running tauri application: {e}");
    }
}
