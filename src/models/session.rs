use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthState {
    #[default]
    Loading,
    SignedOut,
    SignedIn { session: Session },
}

impl AuthState {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => AuthState::SignedIn { session },
            None => AuthState::SignedOut,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::SignedIn { .. })
    }
}
