use crate::error::DashboardError;
use crate::models::issue::IssueId;
use crate::store::IssueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndorsementToggle {
    pub issue_id: IssueId,
    pub endorsed: bool,
    pub votes: u32,
    pub priority_score: u8,
}

/// Issues the current viewer has endorsed during this session.
#[derive(Debug, Clone, Default)]
pub struct EndorsementTracker {
    endorsed: BTreeSet<IssueId>,
}

impl EndorsementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Endorses `id` if it is not endorsed yet, otherwise withdraws the
    /// endorsement. The issue's vote count moves by exactly one either way.
    pub fn toggle(
        &mut self,
        store: &mut dyn IssueStore,
        id: IssueId,
    ) -> Result<EndorsementToggle, DashboardError> {
        let issue = store.get_mut(id).ok_or(DashboardError::IssueNotFound(id))?;

        let endorsed = if self.endorsed.remove(&id) {
            issue.remove_vote();
            false
        } else {
            self.endorsed.insert(id);
            issue.add_vote();
            true
        };

        Ok(EndorsementToggle {
            issue_id: id,
            endorsed,
            votes: issue.votes,
            priority_score: issue.priority_score,
        })
    }

    pub fn is_endorsed(&self, id: IssueId) -> bool {
        self.endorsed.contains(&id)
    }

    pub fn endorsed_ids(&self) -> Vec<IssueId> {
        self.endorsed.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryIssueStore;

    #[test]
    fn toggling_twice_restores_votes_and_membership() {
        let mut store = MemoryIssueStore::seeded();
        let mut tracker = EndorsementTracker::new();

        for id in store.list().iter().map(|i| i.id).collect::<Vec<_>>() {
            let before = store.get(id).cloned().expect("issue");

            let first = tracker.toggle(&mut store, id).expect("endorse");
            assert!(first.endorsed);
            assert_eq!(first.votes, before.votes + 1);
            assert!(tracker.is_endorsed(id));

            let second = tracker.toggle(&mut store, id).expect("withdraw");
            assert!(!second.endorsed);
            assert!(!tracker.is_endorsed(id));

            let after = store.get(id).expect("issue");
            assert_eq!(after.votes, before.votes);
            assert_eq!(after.priority_score, before.priority_score);
        }
    }

    #[test]
    fn endorsement_raises_active_priority_monotonically() {
        let mut store = MemoryIssueStore::seeded();
        let mut tracker = EndorsementTracker::new();
        let before = store.get(5).map(|i| i.priority_score).expect("issue 5");

        let toggled = tracker.toggle(&mut store, 5).expect("endorse");
        assert!(toggled.priority_score >= before);
    }

    #[test]
    fn unknown_issue_leaves_state_untouched() {
        let mut store = MemoryIssueStore::seeded();
        let mut tracker = EndorsementTracker::new();

        assert!(matches!(
            tracker.toggle(&mut store, 999),
            Err(DashboardError::IssueNotFound(999))
        ));
        assert!(tracker.endorsed_ids().is_empty());
    }

    #[test]
    fn withdrawing_never_goes_below_zero() {
        let mut store = MemoryIssueStore::new();
        let mut tracker = EndorsementTracker::new();
        let issue = store.create(crate::store::seed::sample_draft());

        tracker.toggle(&mut store, issue.id).expect("endorse");
        store.get_mut(issue.id).expect("issue").votes = 0;
        let withdrawn = tracker.toggle(&mut store, issue.id).expect("withdraw");
        assert_eq!(withdrawn.votes, 0);
    }
}
