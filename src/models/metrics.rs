use serde::{Deserialize, Serialize};

/// Headline counters for the dashboard metrics panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_active: usize,
    pub resolved_this_month: usize,
    pub avg_response_days: Option<f64>,
    pub most_issues_neighborhood: Option<String>,
    pub most_issues_neighborhood_count: usize,
    pub most_critical_category: Option<String>,
    pub most_critical_category_share: f64, // percent of active critical issues
}
