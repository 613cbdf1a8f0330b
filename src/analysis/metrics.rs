use crate::models::issue::{Issue, IssueStatus, Severity};
use crate::models::metrics::DashboardMetrics;
use chrono::{DateTime, Datelike, Utc};
use std::collections::BTreeMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Derives the headline counters from the catalog as of `now`.
///
/// Resolved issues without a resolution timestamp count as resolved but
/// belong to no calendar month.
pub fn compute_metrics(catalog: &[Issue], now: DateTime<Utc>) -> DashboardMetrics {
    let active: Vec<&Issue> = catalog.iter().filter(|i| i.is_active()).collect();
    let resolved_this_month: Vec<&Issue> = catalog
        .iter()
        .filter(|i| i.status == IssueStatus::Resolved)
        .filter(|i| i.resolved_at.is_some_and(|at| same_month(at, now)))
        .collect();

    let avg_response_days = if resolved_this_month.is_empty() {
        None
    } else {
        let total: u64 = resolved_this_month.iter().map(|i| u64::from(i.days_open)).sum();
        Some(total as f64 / resolved_this_month.len() as f64)
    };

    let (most_issues_neighborhood, most_issues_neighborhood_count) =
        leader(active.iter().map(|i| i.neighborhood.as_str()));

    let critical: Vec<&&Issue> = active
        .iter()
        .filter(|i| i.severity == Severity::Critical)
        .collect();
    let (most_critical_category, category_count) =
        leader(critical.iter().map(|i| i.category.as_str()));
    let most_critical_category_share = if critical.is_empty() {
        0.0
    } else {
        category_count as f64 / critical.len() as f64 * 100.0
    };

    DashboardMetrics {
        total_active: active.len(),
        resolved_this_month: resolved_this_month.len(),
        avg_response_days,
        most_issues_neighborhood,
        most_issues_neighborhood_count,
        most_critical_category,
        most_critical_category_share,
    }
}

fn same_month(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    at.year() == now.year() && at.month() == now.month()
}

/// Most frequent key. Ties go to the alphabetically first key, compared
/// case-insensitively with accents folded.
fn leader<'a>(keys: impl Iterator<Item = &'a str>) -> (Option<String>, usize) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }

    let best = counts.into_iter().max_by(|(a, count_a), (b, count_b)| {
        count_a
            .cmp(count_b)
            .then_with(|| collation_key(b).cmp(&collation_key(a)))
            .then_with(|| b.cmp(a))
    });

    match best {
        Some((key, count)) => (Some(key.to_string()), count),
        None => (None, 0),
    }
}

fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::sample_issues;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().expect("valid date")
    }

    #[test]
    fn counts_active_issues_and_leaders_on_sample_data() {
        let metrics = compute_metrics(&sample_issues(), at(2026, 2, 20));

        assert_eq!(metrics.total_active, 7);
        assert_eq!(metrics.resolved_this_month, 0);
        assert_eq!(metrics.avg_response_days, None);
        // Every active neighborhood has one issue; alphabetical tie-break wins.
        assert_eq!(metrics.most_issues_neighborhood.as_deref(), Some("Batista Campos"));
        assert_eq!(metrics.most_issues_neighborhood_count, 1);
        assert_eq!(
            metrics.most_critical_category.as_deref(),
            Some("Vias e Pavimentação")
        );
        assert!((metrics.most_critical_category_share - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn resolved_this_month_uses_calendar_month() {
        let mut issues = sample_issues();
        let now = at(2026, 3, 15);
        issues[0].status = IssueStatus::Resolved;
        issues[0].days_open = 4;
        issues[0].resolved_at = Some(at(2026, 3, 2));
        issues[1].status = IssueStatus::Resolved;
        issues[1].days_open = 9;
        issues[1].resolved_at = Some(at(2026, 3, 14));
        issues[2].status = IssueStatus::Resolved;
        issues[2].days_open = 30;
        issues[2].resolved_at = Some(at(2026, 2, 28));
        issues[3].status = IssueStatus::Resolved;
        issues[3].days_open = 30;
        issues[3].resolved_at = Some(at(2025, 3, 10));

        let metrics = compute_metrics(&issues, now);
        assert_eq!(metrics.resolved_this_month, 2);
        assert_eq!(metrics.avg_response_days, Some(6.5));
        assert_eq!(metrics.total_active, 3);
    }

    #[test]
    fn neighborhood_with_most_active_issues_wins() {
        let mut issues = sample_issues();
        issues[4].neighborhood = "Marco".to_string();
        issues[5].neighborhood = "Marco".to_string(); // resolved, not counted

        let metrics = compute_metrics(&issues, at(2026, 2, 1));
        assert_eq!(metrics.most_issues_neighborhood.as_deref(), Some("Marco"));
        assert_eq!(metrics.most_issues_neighborhood_count, 2);
    }

    #[test]
    fn empty_catalog_has_no_leaders() {
        let metrics = compute_metrics(&[], at(2026, 2, 1));
        assert_eq!(metrics.total_active, 0);
        assert_eq!(metrics.most_issues_neighborhood, None);
        assert_eq!(metrics.most_critical_category, None);
        assert_eq!(metrics.most_critical_category_share, 0.0);
    }

    #[test]
    fn ties_break_alphabetically_ignoring_accents_and_case() {
        let mut issues: Vec<Issue> = sample_issues().into_iter().take(2).collect();
        issues[0].neighborhood = "Bengui".to_string();
        issues[1].neighborhood = "Águas Lindas".to_string();

        let metrics = compute_metrics(&issues, at(2026, 2, 1));
        assert_eq!(metrics.most_issues_neighborhood.as_deref(), Some("Águas Lindas"));
        // Both issues are critical; the category tie folds case too.
        issues[0].category = "drenagem".to_string();
        issues[1].category = "Esgoto".to_string();
        let metrics = compute_metrics(&issues, at(2026, 2, 1));
        assert_eq!(metrics.most_critical_category.as_deref(), Some("drenagem"));
    }
}
