use crate::models::issue::{Issue, Severity};
use serde::{Deserialize, Serialize};

/// Votes beyond this count no longer raise the score.
pub const VOTE_SATURATION: u32 = 500;
/// Days open beyond this count no longer raise the score.
pub const AGE_SATURATION_DAYS: u32 = 30;

const VOTE_WEIGHT: f64 = 0.6;
const AGE_WEIGHT: f64 = 0.4;

/// Community pressure can add at most this many points on top of the
/// severity base. Tier bases sit at least this far apart, so a higher tier
/// always outranks a lower one at equal votes and age.
const MAX_BOOST: f64 = 20.0;

/// Score band a freshly reported issue lands in, inclusive.
pub fn cold_start_band(severity: Severity) -> (u8, u8) {
    match severity {
        Severity::Critical => (85, 95),
        Severity::High => (65, 80),
        Severity::Medium => (40, 60),
        Severity::Low => (15, 35),
    }
}

/// Priority score in `0..=100` from community support, age and severity.
pub fn score(votes: u32, days_open: u32, severity: Severity) -> u8 {
    let (base, _) = cold_start_band(severity);
    let boost = (urgency(votes, days_open) * MAX_BOOST).floor();
    (f64::from(base) + boost).clamp(0.0, 100.0) as u8
}

/// Normalized `0.0..=1.0` pressure from votes (log scale) and age (linear).
fn urgency(votes: u32, days_open: u32) -> f64 {
    let vote_factor = f64::from(votes.min(VOTE_SATURATION)).ln_1p()
        / f64::from(VOTE_SATURATION).ln_1p();
    let age_factor = f64::from(days_open.min(AGE_SATURATION_DAYS)) / f64::from(AGE_SATURATION_DAYS);
    (VOTE_WEIGHT * vote_factor + AGE_WEIGHT * age_factor).clamp(0.0, 1.0)
}

/// Visual emphasis tier for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Low,
    Moderate,
    High,
    Urgent,
}

impl PriorityLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => PriorityLevel::Urgent,
            65..=84 => PriorityLevel::High,
            40..=64 => PriorityLevel::Moderate,
            _ => PriorityLevel::Low,
        }
    }
}

/// Highest score first. Equal scores keep catalog order.
pub fn rank_by_priority(issues: &[Issue]) -> Vec<Issue> {
    let mut ranked = issues.to_vec();
    ranked.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
    ranked
}
