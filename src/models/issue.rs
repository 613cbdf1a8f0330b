use crate::analysis::priority;
use crate::error::DashboardError;
use crate::models::map::MapPoint;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type IssueId = u64;

/// Lifecycle of a reported issue. Declaration order is the only allowed direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IssueStatus {
    Open,
    #[serde(rename = "In Analysis")]
    InAnalysis,
    Forwarded,
    Resolved,
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueStatus::Open => "Open",
            IssueStatus::InAnalysis => "In Analysis",
            IssueStatus::Forwarded => "Forwarded",
            IssueStatus::Resolved => "Resolved",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    #[default]
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub address: String,
    pub neighborhood: String,
    pub category: String,
    pub description: String,
    pub status: IssueStatus,
    pub severity: Severity,
    pub votes: u32,
    pub days_open: u32,
    pub priority_score: u8,
    pub estimated_affected: u32,
    pub position: MapPoint,
    pub is_recurrent: bool,
    pub evidence: Vec<String>,
    pub anonymous: bool,
    /// Photo shown on list cards and map popups.
    pub image: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Everything a caller supplies when reporting a new issue. The store assigns
/// the id and the initial lifecycle fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDraft {
    pub title: String,
    pub address: String,
    pub neighborhood: String,
    pub category: String,
    pub description: String,
    pub severity: Severity,
    pub estimated_affected: u32,
    pub position: MapPoint,
    pub is_recurrent: bool,
    pub evidence: Vec<String>,
    pub anonymous: bool,
}

impl Issue {
    pub fn from_draft(id: IssueId, draft: IssueDraft) -> Self {
        Issue {
            id,
            title: draft.title,
            address: draft.address,
            neighborhood: draft.neighborhood,
            category: draft.category,
            description: draft.description,
            status: IssueStatus::Open,
            severity: draft.severity,
            votes: 0,
            days_open: 0,
            priority_score: priority::score(0, 0, draft.severity),
            estimated_affected: draft.estimated_affected,
            position: draft.position,
            is_recurrent: draft.is_recurrent,
            // First attachment doubles as the card photo.
            image: draft.evidence.first().cloned(),
            evidence: draft.evidence,
            anonymous: draft.anonymous,
            resolved_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status != IssueStatus::Resolved
    }

    /// Recomputes the stored score. Resolved issues keep the score they had
    /// when they were resolved.
    pub fn refresh_priority(&mut self) {
        if self.is_active() {
            self.priority_score = priority::score(self.votes, self.days_open, self.severity);
        }
    }

    pub fn add_vote(&mut self) {
        self.votes = self.votes.saturating_add(1);
        self.refresh_priority();
    }

    pub fn remove_vote(&mut self) {
        self.votes = self.votes.saturating_sub(1);
        self.refresh_priority();
    }

    /// Ages an active issue. Returns false when the update was ignored
    /// (resolved issue, or a value lower than the current age).
    pub fn set_days_open(&mut self, days: u32) -> bool {
        if !self.is_active() || days < self.days_open {
            return false;
        }
        self.days_open = days;
        self.refresh_priority();
        true
    }

    pub fn advance_status(
        &mut self,
        to: IssueStatus,
        now: DateTime<Utc>,
    ) -> Result<(), DashboardError> {
        if to <= self.status {
            return Err(DashboardError::InvalidTransition {
                from: self.status,
                to,
            });
        }

        if to == IssueStatus::Resolved {
            self.refresh_priority();
            self.resolved_at = Some(now);
        }
        self.status = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(severity: Severity) -> IssueDraft {
        IssueDraft {
            title: "Broken streetlight".to_string(),
            address: "Rua dos Mundurucus, 890".to_string(),
            neighborhood: "Guamá".to_string(),
            category: "Iluminação Pública".to_string(),
            description: String::new(),
            severity,
            estimated_affected: 0,
            position: MapPoint::CENTER,
            is_recurrent: false,
            evidence: vec![],
            anonymous: false,
        }
    }

    #[test]
    fn new_issue_starts_open_with_cold_start_score() {
        let issue = Issue::from_draft(9, draft(Severity::Medium));
        assert_eq!(issue.status, IssueStatus::Open);
        assert_eq!(issue.votes, 0);
        assert_eq!(issue.days_open, 0);
        assert!((40..=60).contains(&issue.priority_score));
        assert_eq!(issue.image, None);
    }

    #[test]
    fn first_attachment_becomes_the_photo() {
        let issue = Issue::from_draft(
            9,
            IssueDraft {
                evidence: vec!["fotos/poste.jpg".to_string(), "fotos/rua.jpg".to_string()],
                ..draft(Severity::High)
            },
        );
        assert_eq!(issue.image.as_deref(), Some("fotos/poste.jpg"));
        assert_eq!(issue.evidence.len(), 2);
    }

    #[test]
    fn status_only_moves_forward() {
        let now = Utc::now();
        let mut issue = Issue::from_draft(1, draft(Severity::High));
        issue
            .advance_status(IssueStatus::Forwarded, now)
            .expect("skip ahead");
        assert!(matches!(
            issue.advance_status(IssueStatus::InAnalysis, now),
            Err(DashboardError::InvalidTransition { .. })
        ));
        assert!(issue.advance_status(IssueStatus::Forwarded, now).is_err());
        assert_eq!(issue.status, IssueStatus::Forwarded);
    }

    #[test]
    fn resolving_freezes_age_and_score() {
        let now = Utc::now();
        let mut issue = Issue::from_draft(1, draft(Severity::Critical));
        assert!(issue.set_days_open(10));
        issue
            .advance_status(IssueStatus::Resolved, now)
            .expect("resolve");
        let frozen = issue.priority_score;

        assert!(!issue.set_days_open(40));
        assert_eq!(issue.days_open, 10);
        issue.add_vote();
        assert_eq!(issue.priority_score, frozen);
        assert_eq!(issue.resolved_at, Some(now));
    }

    #[test]
    fn age_never_decreases() {
        let mut issue = Issue::from_draft(1, draft(Severity::Low));
        assert!(issue.set_days_open(5));
        assert!(!issue.set_days_open(3));
        assert_eq!(issue.days_open, 5);
    }

    #[test]
    fn status_serializes_with_display_labels() {
        let raw = serde_json::to_string(&IssueStatus::InAnalysis).expect("serialize");
        assert_eq!(raw, "\"In Analysis\"");
        let sev = serde_json::to_string(&Severity::Critical).expect("serialize");
        assert_eq!(sev, "\"critical\"");
    }
}
