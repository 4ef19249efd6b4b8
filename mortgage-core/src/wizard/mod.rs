//! Four-step pre-approval application wizard.
//!
//! The wizard owns the [`ApplicationForm`] record and the current
//! [`ValidationErrors`], and gates forward movement on per-step validation.
//! Backward movement is unconditional and loses nothing. Submission runs the
//! final step's validation and then hands the whole record to a
//! [`SubmitApplication`] collaborator.
//!
//! Everything here is synchronous and single-threaded; each user action maps
//! to exactly one method call that runs to completion.

pub mod submission;
pub mod validation;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{ApplicationForm, FieldValue, FormField};

pub use submission::{LoggingSubmitter, SubmissionError, SubmissionReceipt, SubmitApplication};
pub use validation::{validate_step, ValidationErrors};

/// The wizard's four steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    HomeAndLoan,
    PersonalInfo,
    FinancialInfo,
    PropertyAndConsent,
}

impl WizardStep {
    pub const TOTAL: u8 = 4;

    /// 1-based position shown in the progress header.
    pub fn number(self) -> u8 {
        match self {
            Self::HomeAndLoan => 1,
            Self::PersonalInfo => 2,
            Self::FinancialInfo => 3,
            Self::PropertyAndConsent => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::HomeAndLoan => "Home & Loan Details",
            Self::PersonalInfo => "Personal Information",
            Self::FinancialInfo => "Financial Information",
            Self::PropertyAndConsent => "Property Location & Agreements",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::HomeAndLoan => Some(Self::PersonalInfo),
            Self::PersonalInfo => Some(Self::FinancialInfo),
            Self::FinancialInfo => Some(Self::PropertyAndConsent),
            Self::PropertyAndConsent => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            Self::HomeAndLoan => None,
            Self::PersonalInfo => Some(Self::HomeAndLoan),
            Self::FinancialInfo => Some(Self::PersonalInfo),
            Self::PropertyAndConsent => Some(Self::FinancialInfo),
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, Self::PropertyAndConsent)
    }

    /// Completion shown by the progress bar after entering this step.
    pub fn progress_percent(self) -> u8 {
        (self.number() as u16 * 100 / Self::TOTAL as u16) as u8
    }

    /// The form fields collected on this step, in display order.
    /// `agreeMarketing` is collected on the final step but never validated.
    pub fn fields(self) -> &'static [FormField] {
        match self {
            Self::HomeAndLoan => &[
                FormField::HomePrice,
                FormField::DownPayment,
                FormField::LoanPurpose,
                FormField::PropertyType,
                FormField::Occupancy,
            ],
            Self::PersonalInfo => &[
                FormField::FirstName,
                FormField::LastName,
                FormField::Email,
                FormField::Phone,
                FormField::DateOfBirth,
                FormField::Ssn,
            ],
            Self::FinancialInfo => &[
                FormField::AnnualIncome,
                FormField::MonthlyDebt,
                FormField::EmploymentStatus,
                FormField::Employer,
                FormField::JobTitle,
                FormField::YearsEmployed,
            ],
            Self::PropertyAndConsent => &[
                FormField::Address,
                FormField::City,
                FormField::State,
                FormField::ZipCode,
                FormField::AgreeTerms,
                FormField::AgreeCreditCheck,
                FormField::AgreeMarketing,
            ],
        }
    }
}

/// Errors from [`Wizard::submit`].
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Submit was requested from a step other than the last.
    #[error("submit is only available from the final step, currently on step {0}")]
    NotFinalStep(u8),

    /// The final step failed validation; the error map holds the details.
    #[error("the application has validation errors")]
    InvalidFields,

    /// The submission collaborator refused the record.
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Controller for the pre-approval wizard.
///
/// Holds the shared form record, the current step, and the error map that
/// the presentation layer reads back after every mutation.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    form: ApplicationForm,
    errors: ValidationErrors,
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::HomeAndLoan
    }
}

impl Wizard {
    /// A wizard at step 1 with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn progress_percent(&self) -> u8 {
        self.step.progress_percent()
    }

    /// Applies a single field edit.
    ///
    /// If the edited field currently has a validation error, that one entry
    /// is removed immediately; no other field is re-validated.
    pub fn update_field(
        &mut self,
        field: FormField,
        value: FieldValue,
    ) {
        if self.form.set(field, value) {
            self.errors.clear_field(field);
        }
    }

    /// Validates the current step and moves forward on success.
    ///
    /// On failure the error map is replaced with the step's failures and the
    /// step does not change. Returns whether the wizard advanced. The final
    /// step has no forward transition; use [`submit`](Self::submit) there.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            warn!(step = self.step.number(), "advance requested from the final step");
            return false;
        };
        self.errors = validate_step(self.step, &self.form);
        if !self.errors.is_empty() {
            debug!(
                step = self.step.number(),
                failures = self.errors.len(),
                "step validation failed"
            );
            return false;
        }
        self.step = next;
        debug!(step = self.step.number(), "advanced to next step");
        true
    }

    /// Moves back one step unconditionally, preserving every entered value.
    /// Returns whether the wizard moved (false only on step 1).
    pub fn go_back(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                debug!(step = self.step.number(), "returned to previous step");
                true
            }
            None => false,
        }
    }

    /// Validates the final step and hands the complete record to the
    /// submission collaborator.
    ///
    /// On validation failure the collaborator is never invoked; the error
    /// map is populated exactly as a failed [`advance`](Self::advance) would.
    pub fn submit(
        &mut self,
        submitter: &mut dyn SubmitApplication,
    ) -> Result<SubmissionReceipt, SubmitError> {
        if !self.step.is_final() {
            return Err(SubmitError::NotFinalStep(self.step.number()));
        }
        self.errors = validate_step(self.step, &self.form);
        if !self.errors.is_empty() {
            debug!(failures = self.errors.len(), "submission blocked by validation");
            return Err(SubmitError::InvalidFields);
        }
        let receipt = submitter.submit(&self.form)?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Submission collaborator that records every call.
    #[derive(Default)]
    struct RecordingSubmitter {
        received: Vec<ApplicationForm>,
    }

    impl SubmitApplication for RecordingSubmitter {
        fn submit(
            &mut self,
            application: &ApplicationForm,
        ) -> Result<SubmissionReceipt, SubmissionError> {
            self.received.push(application.clone());
            Ok(SubmissionReceipt {
                confirmation: "recorded".to_string(),
            })
        }
    }

    fn fill_step1(wizard: &mut Wizard) {
        wizard.update_field(FormField::HomePrice, "400000".into());
        wizard.update_field(FormField::DownPayment, "80000".into());
        wizard.update_field(FormField::LoanPurpose, "purchase".into());
        wizard.update_field(FormField::PropertyType, "single-family".into());
        wizard.update_field(FormField::Occupancy, "primary".into());
    }

    fn fill_step2(wizard: &mut Wizard) {
        wizard.update_field(FormField::FirstName, "Jane".into());
        wizard.update_field(FormField::LastName, "Doe".into());
        wizard.update_field(FormField::Email, "jane.doe@example.com".into());
        wizard.update_field(FormField::Phone, "4155551234".into());
        wizard.update_field(FormField::DateOfBirth, "1985-04-12".into());
        wizard.update_field(FormField::Ssn, "123456789".into());
    }

    fn fill_step3(wizard: &mut Wizard) {
        wizard.update_field(FormField::AnnualIncome, "120000".into());
        wizard.update_field(FormField::MonthlyDebt, "450".into());
        wizard.update_field(FormField::EmploymentStatus, "employed".into());
        wizard.update_field(FormField::Employer, "Acme Corp".into());
        wizard.update_field(FormField::JobTitle, "Engineer".into());
        wizard.update_field(FormField::YearsEmployed, "6".into());
    }

    fn fill_step4(wizard: &mut Wizard) {
        wizard.update_field(FormField::Address, "123 Main Street".into());
        wizard.update_field(FormField::City, "San Francisco".into());
        wizard.update_field(FormField::State, "CA".into());
        wizard.update_field(FormField::ZipCode, "94102".into());
        wizard.update_field(FormField::AgreeTerms, true.into());
        wizard.update_field(FormField::AgreeCreditCheck, true.into());
    }

    fn wizard_at_final_step() -> Wizard {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        assert!(wizard.advance());
        fill_step2(&mut wizard);
        assert!(wizard.advance());
        fill_step3(&mut wizard);
        assert!(wizard.advance());
        fill_step4(&mut wizard);
        wizard
    }

    #[test]
    fn starts_on_step_one_with_empty_record() {
        let wizard = Wizard::new();

        assert_eq!(wizard.step(), WizardStep::HomeAndLoan);
        assert_eq!(wizard.progress_percent(), 25);
        assert!(wizard.errors().is_empty());
        assert_eq!(*wizard.form(), ApplicationForm::default());
    }

    #[test]
    fn step_numbers_and_progress_are_linear() {
        let steps = [
            WizardStep::HomeAndLoan,
            WizardStep::PersonalInfo,
            WizardStep::FinancialInfo,
            WizardStep::PropertyAndConsent,
        ];

        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.number() as usize, index + 1);
            assert_eq!(step.progress_percent() as usize, (index + 1) * 25);
        }
        assert!(WizardStep::PropertyAndConsent.is_final());
        assert_eq!(WizardStep::HomeAndLoan.previous(), None);
        assert_eq!(WizardStep::PropertyAndConsent.next(), None);
    }

    #[test]
    fn advance_with_empty_home_price_stays_and_reports_error() {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        wizard.update_field(FormField::HomePrice, "".into());

        assert!(!wizard.advance());

        assert_eq!(wizard.step(), WizardStep::HomeAndLoan);
        assert_eq!(
            wizard.errors().message(FormField::HomePrice),
            Some("Home price is required")
        );
    }

    #[test]
    fn advance_clears_errors_on_success() {
        let mut wizard = Wizard::new();
        assert!(!wizard.advance());
        assert!(!wizard.errors().is_empty());

        fill_step1(&mut wizard);
        assert!(wizard.advance());

        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn editing_a_field_removes_only_its_own_error() {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        wizard.advance();
        assert!(!wizard.advance()); // step 2 is empty, everything fails
        assert!(wizard.errors().message(FormField::Email).is_some());
        let failures_before = wizard.errors().len();

        wizard.update_field(FormField::Email, "jane@example.com".into());

        assert_eq!(wizard.errors().message(FormField::Email), None);
        assert_eq!(wizard.errors().len(), failures_before - 1);
        assert!(wizard.errors().message(FormField::FirstName).is_some());
    }

    #[test]
    fn go_back_preserves_entered_values() {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        wizard.advance();
        fill_step2(&mut wizard);
        wizard.advance();
        fill_step3(&mut wizard);

        assert!(wizard.go_back());
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);

        // Step 3 values survive the round trip untouched.
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::FinancialInfo);
        assert_eq!(wizard.form().annual_income, "120000");
        assert_eq!(wizard.form().employer, "Acme Corp");
    }

    #[test]
    fn go_back_refused_on_first_step() {
        let mut wizard = Wizard::new();

        assert!(!wizard.go_back());
        assert_eq!(wizard.step(), WizardStep::HomeAndLoan);
    }

    #[test]
    fn go_back_is_unconditional_even_with_invalid_fields() {
        let mut wizard = Wizard::new();
        fill_step1(&mut wizard);
        wizard.advance();
        wizard.update_field(FormField::Email, "not-an-email".into());

        assert!(wizard.go_back());
        assert_eq!(wizard.step(), WizardStep::HomeAndLoan);
        assert_eq!(wizard.form().email, "not-an-email");
    }

    #[test]
    fn advance_refused_on_final_step() {
        let mut wizard = wizard_at_final_step();

        assert!(!wizard.advance());
        assert_eq!(wizard.step(), WizardStep::PropertyAndConsent);
    }

    #[test]
    fn submit_without_terms_agreement_never_reaches_collaborator() {
        let mut wizard = wizard_at_final_step();
        wizard.update_field(FormField::AgreeTerms, false.into());
        let mut submitter = RecordingSubmitter::default();

        let result = wizard.submit(&mut submitter);

        assert!(matches!(result, Err(SubmitError::InvalidFields)));
        assert!(submitter.received.is_empty());
        assert_eq!(
            wizard.errors().message(FormField::AgreeTerms),
            Some("You must agree to the terms")
        );
    }

    #[test]
    fn submit_from_earlier_step_is_refused_without_validating() {
        let mut wizard = Wizard::new();
        let mut submitter = RecordingSubmitter::default();

        let result = wizard.submit(&mut submitter);

        assert!(matches!(result, Err(SubmitError::NotFinalStep(1))));
        assert!(submitter.received.is_empty());
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn submit_hands_complete_record_to_collaborator() {
        let mut wizard = wizard_at_final_step();
        let mut submitter = RecordingSubmitter::default();

        let receipt = wizard.submit(&mut submitter).unwrap();

        assert_eq!(receipt.confirmation, "recorded");
        assert_eq!(submitter.received.len(), 1);
        let record = &submitter.received[0];
        assert_eq!(record.home_price, "400000");
        assert_eq!(record.ssn, "123456789");
        assert_eq!(record.state, "CA");
        assert!(record.agree_terms);
        assert!(record.agree_credit_check);
        assert!(!record.agree_marketing);
    }

    #[test]
    fn mismatched_edit_kind_keeps_existing_error() {
        let mut wizard = wizard_at_final_step();
        wizard.update_field(FormField::AgreeTerms, false.into());
        let mut submitter = RecordingSubmitter::default();
        let _ = wizard.submit(&mut submitter);
        assert!(wizard.errors().message(FormField::AgreeTerms).is_some());

        // A text edit cannot land in a checkbox field, so nothing changed
        // and the error must survive.
        wizard.update_field(FormField::AgreeTerms, "true".into());

        assert!(wizard.errors().message(FormField::AgreeTerms).is_some());
    }
}
