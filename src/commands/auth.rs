use crate::auth::{self, AuthContext};
use crate::models::session::AuthState;

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_auth_state(ctx: tauri::State<'_, AuthContext>) -> Result<AuthState, String> {
    Ok(get_auth_state_internal(ctx.inner()))
}

pub fn get_auth_state_internal(ctx: &AuthContext) -> AuthState {
    ctx.gate.state()
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn request_email_link(
    email: String,
    ctx: tauri::State<'_, AuthContext>,
) -> Result<(), String> {
    request_email_link_internal(ctx.inner(), &email).await
}

pub async fn request_email_link_internal(ctx: &AuthContext, email: &str) -> Result<(), String> {
    auth::request_email_link(ctx.provider.as_ref(), email)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn sign_out(ctx: tauri::State<'_, AuthContext>) -> Result<(), String> {
    sign_out_internal(ctx.inner()).await
}

pub async fn sign_out_internal(ctx: &AuthContext) -> Result<(), String> {
    auth::sign_out(ctx.provider.as_ref())
        .await
        .map_err(|e| e.to_string())
}
