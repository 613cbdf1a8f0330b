use crate::models::issue::{Issue, IssueId, IssueStatus, Severity};
use crate::models::map::MapPoint;
use serde::{Deserialize, Serialize};

/// Step 1 of the report wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identification {
    pub title: String,
    pub category: String,
    pub severity: Severity,
    pub neighborhood: String,
}

/// Step 2 of the report wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub address: String,
    pub position: Option<MapPoint>,
    pub description: String,
}

/// Step 3 of the report wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evidence {
    pub attachments: Vec<String>,
    pub anonymous: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportForm {
    pub identification: Identification,
    pub location: Location,
    pub evidence: Evidence,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Identification,
    Location,
    Evidence,
}

impl WizardStep {
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Identification => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::Evidence),
            WizardStep::Evidence => None,
        }
    }

    pub fn previous(self) -> Option<WizardStep> {
        match self {
            WizardStep::Identification => None,
            WizardStep::Location => Some(WizardStep::Identification),
            WizardStep::Evidence => Some(WizardStep::Location),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            WizardStep::Identification => 1,
            WizardStep::Location => 2,
            WizardStep::Evidence => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    Title,
    Category,
    Neighborhood,
    Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ReportField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: ReportField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub protocol: IssueId,
    pub status: IssueStatus,
    pub expected_response_days: Option<f64>,
    pub issue: Issue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReportSubmission {
    Accepted { receipt: ReportReceipt },
    Rejected { errors: Vec<FieldError> },
}

/// The report wizard as the modal renders it. `errors` lists what blocked
/// the last attempt to move forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardView {
    pub step: WizardStep,
    pub step_number: u8,
    pub form: ReportForm,
    pub can_submit: bool,
    pub errors: Vec<FieldError>,
}
