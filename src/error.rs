use crate::models::issue::{IssueId, IssueStatus};
use thiserror::Error;

/// Error returned by the auth provider. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("ISSUE_NOT_FOUND: no issue with id {0}")]
    IssueNotFound(IssueId),

    #[error("DUPLICATE_ISSUE_ID: id {0} appears more than once")]
    DuplicateIssueId(IssueId),

    #[error("INVALID_TRANSITION: cannot move issue from {from} to {to}")]
    InvalidTransition { from: IssueStatus, to: IssueStatus },

    #[error("Enter your email.")]
    MissingEmail,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("SETTINGS: {0}")]
    Settings(String),

    #[error("Dashboard state lock error")]
    StateUnavailable,
}
