use crate::models::issue::IssueDraft;
use crate::models::map::MapPoint;
use crate::models::report::{
    FieldError, Identification, Location, ReportField, ReportForm, ReportReceipt,
    ReportSubmission, WizardStep, WizardView,
};
use crate::store::seed::{CATEGORIES, REPORT_NEIGHBORHOODS};
use crate::store::IssueStore;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_identification(step: &Identification) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if is_blank(&step.title) {
        errors.push(FieldError::new(ReportField::Title, "Title is required"));
    }

    if is_blank(&step.category) {
        errors.push(FieldError::new(ReportField::Category, "Select a category"));
    } else if !CATEGORIES.contains(&step.category.as_str()) {
        errors.push(FieldError::new(
            ReportField::Category,
            format!("Unknown category: {}", step.category),
        ));
    }

    if is_blank(&step.neighborhood) {
        errors.push(FieldError::new(
            ReportField::Neighborhood,
            "Select a neighborhood",
        ));
    } else if !REPORT_NEIGHBORHOODS.contains(&step.neighborhood.as_str()) {
        errors.push(FieldError::new(
            ReportField::Neighborhood,
            format!("Unknown neighborhood: {}", step.neighborhood),
        ));
    }

    errors
}

pub fn validate_location(step: &Location) -> Vec<FieldError> {
    if is_blank(&step.address) {
        vec![FieldError::new(ReportField::Address, "Address is required")]
    } else {
        Vec::new()
    }
}

/// Field errors that block leaving `step`. The evidence step has no required fields.
pub fn validate_step(form: &ReportForm, step: WizardStep) -> Vec<FieldError> {
    match step {
        WizardStep::Identification => validate_identification(&form.identification),
        WizardStep::Location => validate_location(&form.location),
        WizardStep::Evidence => Vec::new(),
    }
}

pub fn validate_form(form: &ReportForm) -> Vec<FieldError> {
    let mut errors = validate_identification(&form.identification);
    errors.extend(validate_location(&form.location));
    errors
}

/// Validated form turned into a store draft.
pub fn to_draft(form: &ReportForm) -> Result<IssueDraft, Vec<FieldError>> {
    let errors = validate_form(form);
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(IssueDraft {
        title: form.identification.title.trim().to_string(),
        address: form.location.address.trim().to_string(),
        neighborhood: form.identification.neighborhood.clone(),
        category: form.identification.category.clone(),
        description: form.location.description.trim().to_string(),
        severity: form.identification.severity,
        estimated_affected: 0,
        position: form
            .location
            .position
            .map(MapPoint::clamped)
            .unwrap_or(MapPoint::CENTER),
        is_recurrent: false,
        evidence: form.evidence.attachments.clone(),
        anonymous: form.evidence.anonymous,
    })
}

/// Validates the whole form and, when it passes, files the issue.
pub fn submit_report(
    store: &mut dyn IssueStore,
    form: &ReportForm,
    expected_response_days: Option<f64>,
) -> ReportSubmission {
    match to_draft(form) {
        Ok(draft) => {
            let issue = store.create(draft);
            ReportSubmission::Accepted {
                receipt: ReportReceipt {
                    protocol: issue.id,
                    status: issue.status,
                    expected_response_days,
                    issue,
                },
            }
        }
        Err(errors) => {
            log::debug!("report rejected with {} field error(s)", errors.len());
            ReportSubmission::Rejected { errors }
        }
    }
}

/// Three-step report flow. Each step is validated when leaving it forward.
#[derive(Debug, Clone, Default)]
pub struct ReportWizard {
    step: WizardStep,
    pub form: ReportForm,
}

impl ReportWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Moves to the next step if the current one is valid. On the last step
    /// this only validates.
    pub fn advance(&mut self) -> Result<WizardStep, Vec<FieldError>> {
        let errors = validate_step(&self.form, self.step);
        if !errors.is_empty() {
            return Err(errors);
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Evidence && validate_form(&self.form).is_empty()
    }

    /// Back to an empty form on the first step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn view(&self, errors: Vec<FieldError>) -> WizardView {
        WizardView {
            step: self.step,
            step_number: self.step.number(),
            form: self.form.clone(),
            can_submit: self.can_submit(),
            errors,
        }
    }

    pub fn submit(
        &self,
        store: &mut dyn IssueStore,
        expected_response_days: Option<f64>,
    ) -> ReportSubmission {
        submit_report(store, &self.form, expected_response_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::issue::{IssueStatus, Severity};
    use crate::store::MemoryIssueStore;

    fn filled_identification() -> Identification {
        Identification {
            title: "Árvore caída".to_string(),
            category: "Arborização e Meio Ambiente".to_string(),
            severity: Severity::Medium,
            neighborhood: "Reduto".to_string(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<ReportField> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn first_step_requires_title_category_and_neighborhood() {
        let errors = validate_identification(&Identification::default());
        assert_eq!(
            fields(&errors),
            vec![
                ReportField::Title,
                ReportField::Category,
                ReportField::Neighborhood
            ]
        );

        let blank_title = Identification {
            title: "   ".to_string(),
            ..filled_identification()
        };
        assert_eq!(
            fields(&validate_identification(&blank_title)),
            vec![ReportField::Title]
        );
        assert!(validate_identification(&filled_identification()).is_empty());
    }

    #[test]
    fn unknown_vocabulary_is_rejected() {
        let step = Identification {
            category: "Potholes".to_string(),
            neighborhood: "Atlantis".to_string(),
            ..filled_identification()
        };
        assert_eq!(
            fields(&validate_identification(&step)),
            vec![ReportField::Category, ReportField::Neighborhood]
        );
    }

    #[test]
    fn wizard_blocks_on_invalid_step_and_walks_back() {
        let mut wizard = ReportWizard::new();
        assert_eq!(wizard.step(), WizardStep::Identification);
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.step(), WizardStep::Identification);

        wizard.form.identification = filled_identification();
        assert_eq!(wizard.advance(), Ok(WizardStep::Location));

        let errors = wizard.advance().expect_err("address missing");
        assert_eq!(fields(&errors), vec![ReportField::Address]);

        wizard.form.location.address = "Rua Ó de Almeida, 55".to_string();
        assert_eq!(wizard.advance(), Ok(WizardStep::Evidence));
        assert!(wizard.can_submit());

        assert_eq!(wizard.back(), WizardStep::Location);
        assert_eq!(wizard.back(), WizardStep::Identification);
        assert_eq!(wizard.back(), WizardStep::Identification);
    }

    #[test]
    fn view_reports_step_number_and_reset_clears_the_form() {
        let mut wizard = ReportWizard::new();
        wizard.form.identification = filled_identification();
        wizard.advance().expect("first step valid");

        let view = wizard.view(Vec::new());
        assert_eq!(view.step, WizardStep::Location);
        assert_eq!(view.step_number, 2);
        assert!(!view.can_submit);

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Identification);
        assert_eq!(wizard.form, ReportForm::default());
    }

    #[test]
    fn accepted_submission_files_an_open_issue() {
        let mut store = MemoryIssueStore::seeded();
        let mut wizard = ReportWizard::new();
        wizard.form.identification = filled_identification();
        wizard.form.location.address = "  Rua Ó de Almeida, 55 ".to_string();
        wizard.form.evidence.anonymous = true;

        match wizard.submit(&mut store, Some(6.2)) {
            ReportSubmission::Accepted { receipt } => {
                assert_eq!(receipt.protocol, 9);
                assert_eq!(receipt.status, IssueStatus::Open);
                assert_eq!(receipt.expected_response_days, Some(6.2));
                assert_eq!(receipt.issue.address, "Rua Ó de Almeida, 55");
                assert_eq!(receipt.issue.position, MapPoint::CENTER);
                assert!(receipt.issue.anonymous);
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert_eq!(store.list().len(), 9);
    }

    #[test]
    fn rejected_submission_leaves_store_untouched() {
        let mut store = MemoryIssueStore::seeded();
        let form = ReportForm {
            identification: filled_identification(),
            ..ReportForm::default()
        };

        match submit_report(&mut store, &form, None) {
            ReportSubmission::Rejected { errors } => {
                assert_eq!(fields(&errors), vec![ReportField::Address])
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(store.list().len(), 8);
    }
}
