use crate::analysis::filter;
use crate::analysis::map::{heat_spots, HeatSpot};
use crate::analysis::priority::{rank_by_priority, PriorityLevel};
use crate::error::DashboardError;
use crate::models::filter::FilterSelection;
use crate::models::issue::{Issue, IssueId, IssueStatus};
use crate::state::{lock, DashboardState, SharedState};
#[cfg(feature = "desktop")]
use crate::store::seed::{vocabularies, Vocabularies};
use serde::{Deserialize, Serialize};

/// An issue as the list and map render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCard {
    #[serde(flatten)]
    pub issue: Issue,
    pub endorsed: bool,
    pub priority_level: PriorityLevel,
}

fn to_cards(state: &DashboardState, issues: Vec<Issue>) -> Vec<IssueCard> {
    issues
        .into_iter()
        .map(|issue| IssueCard {
            endorsed: state.endorsements.is_endorsed(issue.id),
            priority_level: PriorityLevel::from_score(issue.priority_score),
            issue,
        })
        .collect()
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn list_issues(state: tauri::State<'_, SharedState>) -> Result<Vec<IssueCard>, String> {
    list_issues_internal(state.inner())
}

pub fn list_issues_internal(state: &SharedState) -> Result<Vec<IssueCard>, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    let issues = lock.store.list();
    Ok(to_cards(&lock, issues))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn filter_issues(
    selection: FilterSelection,
    state: tauri::State<'_, SharedState>,
) -> Result<Vec<IssueCard>, String> {
    filter_issues_internal(state.inner(), &selection)
}

/// Filters the catalog and remembers `selection` as the current one.
pub fn filter_issues_internal(
    state: &SharedState,
    selection: &FilterSelection,
) -> Result<Vec<IssueCard>, String> {
    let mut lock = lock(state).map_err(|e| e.to_string())?;
    lock.selection = selection.clone();
    let matching = filter::filter_issues(&lock.store.list(), selection);
    Ok(to_cards(&lock, matching))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_filter_selection(
    state: tauri::State<'_, SharedState>,
) -> Result<FilterSelection, String> {
    get_filter_selection_internal(state.inner())
}

pub fn get_filter_selection_internal(state: &SharedState) -> Result<FilterSelection, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    Ok(lock.selection.clone())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn rank_issues(
    selection: FilterSelection,
    state: tauri::State<'_, SharedState>,
) -> Result<Vec<IssueCard>, String> {
    rank_issues_internal(state.inner(), &selection)
}

pub fn rank_issues_internal(
    state: &SharedState,
    selection: &FilterSelection,
) -> Result<Vec<IssueCard>, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    let matching = filter::filter_issues(&lock.store.list(), selection);
    Ok(to_cards(&lock, rank_by_priority(&matching)))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_issue(
    id: IssueId,
    state: tauri::State<'_, SharedState>,
) -> Result<IssueCard, String> {
    get_issue_internal(state.inner(), id)
}

pub fn get_issue_internal(state: &SharedState, id: IssueId) -> Result<IssueCard, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    let issue = lock
        .store
        .get(id)
        .cloned()
        .ok_or_else(|| DashboardError::IssueNotFound(id).to_string())?;
    Ok(to_cards(&lock, vec![issue]).remove(0))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn advance_status(
    id: IssueId,
    to: IssueStatus,
    state: tauri::State<'_, SharedState>,
) -> Result<Issue, String> {
    advance_status_internal(state.inner(), id, to, chrono::Utc::now())
}

pub fn advance_status_internal(
    state: &SharedState,
    id: IssueId,
    to: IssueStatus,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<Issue, String> {
    let mut lock = lock(state).map_err(|e| e.to_string())?;
    let issue = lock
        .store
        .get_mut(id)
        .ok_or_else(|| DashboardError::IssueNotFound(id).to_string())?;
    let from = issue.status;
    issue.advance_status(to, now).map_err(|e| e.to_string())?;
    log::info!("issue {id} moved from {from} to {to}");
    Ok(issue.clone())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn set_days_open(
    id: IssueId,
    days: u32,
    state: tauri::State<'_, SharedState>,
) -> Result<Issue, String> {
    set_days_open_internal(state.inner(), id, days)
}

pub fn set_days_open_internal(state: &SharedState, id: IssueId, days: u32) -> Result<Issue, String> {
    let mut lock = lock(state).map_err(|e| e.to_string())?;
    let issue = lock
        .store
        .get_mut(id)
        .ok_or_else(|| DashboardError::IssueNotFound(id).to_string())?;
    if !issue.set_days_open(days) {
        log::debug!("ignored age update for issue {id} ({} -> {days})", issue.days_open);
    }
    Ok(issue.clone())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_heat_spots(state: tauri::State<'_, SharedState>) -> Result<Vec<HeatSpot>, String> {
    get_heat_spots_internal(state.inner())
}

pub fn get_heat_spots_internal(state: &SharedState) -> Result<Vec<HeatSpot>, String> {
    let lock = lock(state).map_err(|e| e.to_string())?;
    Ok(heat_spots(&lock.store.list()))
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub async fn get_vocabularies() -> Result<Vocabularies, String> {
    Ok(vocabularies())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shared;

    #[test]
    fn cards_carry_endorsement_flag_and_level() {
        let state = shared(DashboardState::seeded());
        {
            let mut guard = lock(&state).expect("lock");
            let DashboardState {
                store,
                endorsements,
                ..
            } = &mut *guard;
            endorsements.toggle(store.as_mut(), 3).expect("endorse");
        }

        let card = get_issue_internal(&state, 3).expect("card");
        assert!(card.endorsed);
        assert_eq!(card.priority_level, PriorityLevel::from_score(card.issue.priority_score));
        assert!(!get_issue_internal(&state, 4).expect("card").endorsed);
    }

    #[test]
    fn card_serializes_flat() {
        let state = shared(DashboardState::seeded());
        let card = get_issue_internal(&state, 1).expect("card");
        let value = serde_json::to_value(&card).expect("serialize");
        assert_eq!(value["id"], serde_json::json!(1));
        assert_eq!(value["endorsed"], serde_json::json!(false));
        assert!(value.get("issue").is_none());
    }
}
