pub mod memory;

use crate::error::{AuthError, DashboardError};
use crate::models::session::{AuthState, Session};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub type SessionCallback = Box<dyn Fn(Option<Session>) + Send + Sync>;

const EMAIL_LINK_FALLBACK: &str = "Could not send the sign-in link.";

/// Passwordless auth backend. Sessions are owned and validated by the
/// provider; the dashboard only reacts to their presence.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn get_current_session(&self) -> Result<Option<Session>, AuthError>;

    fn subscribe_session_changes(&self, callback: SessionCallback) -> Subscription;

    async fn request_email_link(&self, address: &str) -> Result<(), AuthError>;

    async fn end_session(&self) -> Result<(), AuthError>;
}

/// Handle returned by [`AuthProvider::subscribe_session_changes`]. The
/// callback stays registered until the handle is unsubscribed or dropped.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Tracks whether a viewer is signed in. Starts in `Loading` until the
/// provider answers the first session lookup.
pub struct AuthGate {
    state: Arc<Mutex<AuthState>>,
    _subscription: Option<Subscription>,
}

impl Default for AuthGate {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(AuthState::Loading)),
            _subscription: None,
        }
    }
}

impl AuthGate {
    pub async fn attach(provider: &dyn AuthProvider) -> Self {
        let state = Arc::new(Mutex::new(AuthState::Loading));

        // Subscribe first so a change racing the initial lookup is not lost.
        let observed = Arc::clone(&state);
        let subscription = provider.subscribe_session_changes(Box::new(move |session| {
            let next = AuthState::from_session(session);
            log::info!("auth state changed: signed in = {}", next.is_authenticated());
            if let Ok(mut lock) = observed.lock() {
                *lock = next;
            }
        }));

        let initial = match provider.get_current_session().await {
            Ok(session) => AuthState::from_session(session),
            Err(e) => {
                log::warn!("session lookup failed, treating viewer as signed out: {e}");
                AuthState::SignedOut
            }
        };

        if let Ok(mut lock) = state.lock() {
            if *lock == AuthState::Loading {
                *lock = initial;
            }
        }

        Self {
            state,
            _subscription: Some(subscription),
        }
    }

    pub fn state(&self) -> AuthState {
        self.state
            .lock()
            .map(|lock| lock.clone())
            .unwrap_or(AuthState::SignedOut)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }
}

/// Provider plus the gate observing it, as managed by the desktop shell.
pub struct AuthContext {
    pub provider: Arc<dyn AuthProvider>,
    pub gate: AuthGate,
}

impl AuthContext {
    pub async fn connect(provider: Arc<dyn AuthProvider>) -> Self {
        let gate = AuthGate::attach(provider.as_ref()).await;
        Self { provider, gate }
    }
}

/// Asks the provider to email a sign-in link. Blank addresses never reach
/// the provider; provider messages are passed through unchanged.
pub async fn request_email_link(
    provider: &dyn AuthProvider,
    address: &str,
) -> Result<(), DashboardError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(DashboardError::MissingEmail);
    }

    provider.request_email_link(address).await.map_err(|e| {
        log::warn!("email link request rejected: {e}");
        if e.message.trim().is_empty() {
            DashboardError::Auth(AuthError::new(EMAIL_LINK_FALLBACK))
        } else {
            DashboardError::Auth(e)
        }
    })?;

    log::info!("email link sent");
    Ok(())
}

pub async fn sign_out(provider: &dyn AuthProvider) -> Result<(), DashboardError> {
    provider.end_session().await?;
    Ok(())
}
