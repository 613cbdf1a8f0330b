use super::{AuthProvider, SessionCallback, Subscription};
use crate::error::AuthError;
use crate::models::session::Session;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Inner {
    session: Option<Session>,
    subscribers: BTreeMap<u64, Arc<SessionCallback>>,
    next_subscriber: u64,
    sent_links: Vec<String>,
    reject_links_with: Option<String>,
    fail_lookup_with: Option<String>,
}

/// In-process auth provider for tests and offline development. Sign-in
/// completes when [`MemoryAuthProvider::complete_sign_in`] is called, the
/// way a real provider completes it when the emailed link is opened.
#[derive(Clone, Default)]
pub struct MemoryAuthProvider {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        let provider = Self::new();
        if let Ok(mut inner) = provider.inner.lock() {
            inner.session = Some(session);
        }
        provider
    }

    pub fn reject_email_links(&self, message: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.reject_links_with = Some(message.to_string());
        }
    }

    pub fn fail_session_lookup(&self, message: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_lookup_with = Some(message.to_string());
        }
    }

    pub fn sent_links(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.sent_links.clone())
            .unwrap_or_default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.subscribers.len())
            .unwrap_or(0)
    }

    /// Opens the most recent link sent to `email`. Returns false when no
    /// link was sent to that address.
    pub fn complete_sign_in(&self, email: &str) -> bool {
        let session = {
            let Ok(inner) = self.inner.lock() else {
                return false;
            };
            if !inner.sent_links.iter().any(|sent| sent == email) {
                return false;
            }
            Session {
                user_id: format!("user-{}", inner.sent_links.len()),
                email: email.to_string(),
            }
        };
        self.set_session(Some(session));
        true
    }

    fn set_session(&self, session: Option<Session>) {
        let callbacks: Vec<Arc<SessionCallback>> = match self.inner.lock() {
            Ok(mut inner) => {
                inner.session = session.clone();
                inner.subscribers.values().cloned().collect()
            }
            Err(_) => return,
        };

        // Callbacks run outside the lock so they may call back into the provider.
        for callback in callbacks {
            (**callback)(session.clone());
        }
    }
}

#[async_trait]
impl AuthProvider for MemoryAuthProvider {
    async fn get_current_session(&self) -> Result<Option<Session>, AuthError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| AuthError::new("auth provider unavailable"))?;
        match &inner.fail_lookup_with {
            Some(message) => Err(AuthError::new(message.clone())),
            None => Ok(inner.session.clone()),
        }
    }

    fn subscribe_session_changes(&self, callback: SessionCallback) -> Subscription {
        let id = match self.inner.lock() {
            Ok(mut inner) => {
                let id = inner.next_subscriber;
                inner.next_subscriber += 1;
                inner.subscribers.insert(id, Arc::new(callback));
                id
            }
            Err(_) => return Subscription::new(|| {}),
        };

        let inner = Arc::clone(&self.inner);
        Subscription::new(move || {
            if let Ok(mut inner) = inner.lock() {
                inner.subscribers.remove(&id);
            }
        })
    }

    async fn request_email_link(&self, address: &str) -> Result<(), AuthError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| AuthError::new("auth provider unavailable"))?;
        if let Some(message) = &inner.reject_links_with {
            return Err(AuthError::new(message.clone()));
        }
        inner.sent_links.push(address.to_string());
        Ok(())
    }

    async fn end_session(&self) -> Result<(), AuthError> {
        self.set_session(None);
        Ok(())
    }
}
