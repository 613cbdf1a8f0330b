use crate::models::filter::{FilterSelection, FilterTab, NeighborhoodFilter};
use crate::models::issue::{Issue, Severity};

/// Minimum votes for the "most voted" tab.
pub const MOST_VOTED_THRESHOLD: u32 = 150;

/// Issues matching all three clauses of `selection`, in catalog order.
pub fn filter_issues(catalog: &[Issue], selection: &FilterSelection) -> Vec<Issue> {
    let needle = selection.query.to_lowercase();
    catalog
        .iter()
        .filter(|issue| {
            matches_text(issue, &needle)
                && matches_neighborhood(issue, &selection.neighborhood)
                && matches_tab(issue, selection.tab)
        })
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches_text(issue: &Issue, needle: &str) -> bool {
    needle.is_empty()
        || [&issue.title, &issue.address, &issue.neighborhood]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

fn matches_neighborhood(issue: &Issue, filter: &NeighborhoodFilter) -> bool {
    match filter {
        NeighborhoodFilter::All => true,
        NeighborhoodFilter::Named(name) => issue.neighborhood == *name,
    }
}

fn matches_tab(issue: &Issue, tab: FilterTab) -> bool {
    match tab {
        FilterTab::All => true,
        FilterTab::Critical => issue.severity == Severity::Critical,
        FilterTab::Recurrent => issue.is_recurrent,
        FilterTab::MostVoted => issue.votes >= MOST_VOTED_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::sample_issues;

    fn selections() -> Vec<FilterSelection> {
        let mut out = Vec::new();
        for query in ["", "marco", "Av.", "zzz", "GUAMÁ"] {
            for neighborhood in ["all", "Marco", "Bengui", "Pedreira"] {
                for tab in [
                    FilterTab::All,
                    FilterTab::Critical,
                    FilterTab::Recurrent,
                    FilterTab::MostVoted,
                ] {
                    out.push(
                        FilterSelection::default()
                            .with_query(query)
                            .with_neighborhood(neighborhood)
                            .with_tab(tab),
                    );
                }
            }
        }
        out
    }

    fn ids(issues: &[Issue]) -> Vec<u64> {
        issues.iter().map(|i| i.id).collect()
    }

    #[test]
    fn empty_selection_returns_whole_catalog_in_order() {
        let catalog = sample_issues();
        let result = filter_issues(&catalog, &FilterSelection::default());
        assert_eq!(ids(&result), ids(&catalog));
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = sample_issues();
        for selection in selections() {
            let once = filter_issues(&catalog, &selection);
            let twice = filter_issues(&once, &selection);
            assert_eq!(once, twice, "{selection:?}");
        }
    }

    #[test]
    fn narrowing_never_grows_the_result() {
        let catalog = sample_issues();
        for selection in selections() {
            let base = filter_issues(&catalog, &selection).len();
            if selection.query.is_empty() {
                let narrowed = selection.clone().with_query("a");
                assert!(filter_issues(&catalog, &narrowed).len() <= base);
            }
            if selection.neighborhood == NeighborhoodFilter::All {
                let narrowed = selection.clone().with_neighborhood("Marco");
                assert!(filter_issues(&catalog, &narrowed).len() <= base);
            }
        }
    }

    #[test]
    fn tabs_partition_by_their_predicate() {
        let catalog = sample_issues();
        for selection in selections() {
            let result = filter_issues(&catalog, &selection);
            match selection.tab {
                FilterTab::Critical => {
                    assert!(result.iter().all(|i| i.severity == Severity::Critical))
                }
                FilterTab::MostVoted => {
                    assert!(result.iter().all(|i| i.votes >= MOST_VOTED_THRESHOLD))
                }
                FilterTab::Recurrent => assert!(result.iter().all(|i| i.is_recurrent)),
                FilterTab::All => {
                    let without_tab = catalog
                        .iter()
                        .filter(|i| {
                            matches_text(i, &selection.query.to_lowercase())
                                && matches_neighborhood(i, &selection.neighborhood)
                        })
                        .count();
                    assert_eq!(result.len(), without_tab);
                }
            }
        }
    }

    #[test]
    fn critical_popular_issue_shows_in_critical_and_most_voted_tabs() {
        let mut issue = sample_issues().remove(0);
        issue.severity = Severity::Critical;
        issue.votes = 247;
        issue.days_open = 14;
        issue.is_recurrent = false;
        let catalog = vec![issue];

        let critical = FilterSelection::default().with_tab(FilterTab::Critical);
        let most_voted = FilterSelection::default().with_tab(FilterTab::MostVoted);
        let recurrent = FilterSelection::default().with_tab(FilterTab::Recurrent);

        assert_eq!(filter_issues(&catalog, &critical).len(), 1);
        assert_eq!(filter_issues(&catalog, &most_voted).len(), 1);
        assert!(filter_issues(&catalog, &recurrent).is_empty());

        let mut recurring = catalog.clone();
        recurring[0].is_recurrent = true;
        assert_eq!(filter_issues(&recurring, &recurrent).len(), 1);
    }

    #[test]
    fn query_matches_neighborhood_case_insensitively() {
        let mut marco = sample_issues().remove(0);
        marco.title = "Pothole".to_string();
        marco.address = "Av. Almirante Barroso".to_string();
        marco.neighborhood = "Marco".to_string();
        let mut guama = sample_issues().remove(2);
        guama.title = "Streetlight".to_string();
        guama.address = "Rua dos Mundurucus".to_string();
        guama.neighborhood = "Guamá".to_string();
        let catalog = vec![marco, guama];

        for query in ["Marco", "marco", "MARCO"] {
            let result = filter_issues(&catalog, &FilterSelection::default().with_query(query));
            assert_eq!(ids(&result), vec![catalog[0].id]);
        }
    }

    #[test]
    fn neighborhood_match_is_exact() {
        let catalog = sample_issues();
        let result = filter_issues(&catalog, &FilterSelection::default().with_neighborhood("marco"));
        assert!(result.is_empty());
    }
}
