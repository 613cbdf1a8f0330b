use crate::analysis::priority::PriorityLevel;
use crate::models::issue::{Issue, IssueId};
use crate::models::map::MapPoint;
use serde::{Deserialize, Serialize};

const BASE_RADIUS: f64 = 40.0;
const RADIUS_PER_POINT: f64 = 0.3;
const ASPECT: f64 = 0.78;

/// Heat ellipse drawn under the pins of pressing issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatSpot {
    pub issue_id: IssueId,
    pub center: MapPoint,
    pub radius_x: f64,
    pub radius_y: f64,
    pub intensity: f64,
}

/// Heat spots for active issues at high priority or above, hottest first.
pub fn heat_spots(issues: &[Issue]) -> Vec<HeatSpot> {
    let mut spots: Vec<HeatSpot> = issues
        .iter()
        .filter(|issue| issue.is_active())
        .filter(|issue| PriorityLevel::from_score(issue.priority_score) >= PriorityLevel::High)
        .map(|issue| {
            let radius_x = BASE_RADIUS + f64::from(issue.priority_score) * RADIUS_PER_POINT;
            HeatSpot {
                issue_id: issue.id,
                center: issue.position,
                radius_x,
                radius_y: radius_x * ASPECT,
                intensity: f64::from(issue.priority_score) / 100.0,
            }
        })
        .collect();

    spots.sort_by(|a, b| b.intensity.total_cmp(&a.intensity));
    spots
}
