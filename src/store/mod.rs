pub mod seed;

use crate::error::DashboardError;
use crate::models::issue::{Issue, IssueDraft, IssueId};
use std::collections::HashSet;

/// Ordered, read-mostly catalog of issues. Insertion order is display order.
/// Issues are never deleted; they only move through their status lifecycle.
pub trait IssueStore: Send {
    fn list(&self) -> Vec<Issue>;
    fn get(&self, id: IssueId) -> Option<&Issue>;
    fn get_mut(&mut self, id: IssueId) -> Option<&mut Issue>;
    /// Appends a new open issue with a fresh id.
    fn create(&mut self, draft: IssueDraft) -> Issue;
}

/// Process-local store backing the dashboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryIssueStore {
    issues: Vec<Issue>,
}

impl MemoryIssueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the sample catalog.
    pub fn seeded() -> Self {
        Self {
            issues: seed::sample_issues(),
        }
    }

    /// Store over an existing catalog. Ids must be unique.
    pub fn from_issues(issues: Vec<Issue>) -> Result<Self, DashboardError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = issues.iter().map(|i| i.id).find(|id| !seen.insert(*id)) {
            return Err(DashboardError::DuplicateIssueId(duplicate));
        }
        Ok(Self { issues })
    }

    fn next_id(&self) -> IssueId {
        self.issues.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }
}

impl IssueStore for MemoryIssueStore {
    fn list(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    fn get(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    fn get_mut(&mut self, id: IssueId) -> Option<&mut Issue> {
        self.issues.iter_mut().find(|i| i.id == id)
    }

    fn create(&mut self, draft: IssueDraft) -> Issue {
        let issue = Issue::from_draft(self.next_id(), draft);
        log::info!(
            "issue {} reported in {} ({:?})",
            issue.id,
            issue.neighborhood,
            issue.severity
        );
        self.issues.push(issue.clone());
        issue
    }
}
