//! Per-step validation rules for the application form.
//!
//! Each step has a fixed, ordered rule set: one predicate and one message
//! per field. Validation is all-or-nothing per step — every failing field
//! contributes exactly one message and nothing short-circuits — so the
//! presentation layer can show the whole step's problems at once.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::{
    ApplicationForm, EmploymentStatus, FormField, LoanPurpose, Occupancy, PropertyType,
    is_state_code,
};
use crate::wizard::WizardStep;

/// Field-keyed validation failures, ordered by on-screen field order.
///
/// Produced whole by [`validate_step`] (never merged with a previous map)
/// and thinned one entry at a time as the user edits fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for one field, if it failed.
    pub fn message(
        &self,
        field: FormField,
    ) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// All failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub(crate) fn clear_field(
        &mut self,
        field: FormField,
    ) {
        self.0.remove(&field);
    }

    fn insert(
        &mut self,
        field: FormField,
        message: &str,
    ) {
        self.0.insert(field, message.to_string());
    }
}

/// Validates the fields belonging to one step against the shared record.
pub fn validate_step(
    step: WizardStep,
    form: &ApplicationForm,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    match step {
        WizardStep::HomeAndLoan => {
            check_required_positive(
                &mut errors,
                FormField::HomePrice,
                &form.home_price,
                "Home price is required",
            );
            check_required_non_negative(
                &mut errors,
                FormField::DownPayment,
                &form.down_payment,
                "Down payment is required",
            );
            if LoanPurpose::parse(&form.loan_purpose).is_none() {
                errors.insert(FormField::LoanPurpose, "Please select loan purpose");
            }
            if PropertyType::parse(&form.property_type).is_none() {
                errors.insert(FormField::PropertyType, "Please select property type");
            }
            if Occupancy::parse(&form.occupancy).is_none() {
                errors.insert(FormField::Occupancy, "Please select occupancy type");
            }
        }
        WizardStep::PersonalInfo => {
            check_min_chars(
                &mut errors,
                FormField::FirstName,
                &form.first_name,
                2,
                "First name must be at least 2 characters",
            );
            check_min_chars(
                &mut errors,
                FormField::LastName,
                &form.last_name,
                2,
                "Last name must be at least 2 characters",
            );
            if !email_pattern().is_match(&form.email) {
                errors.insert(FormField::Email, "Please enter a valid email address");
            }
            check_min_chars(
                &mut errors,
                FormField::Phone,
                &form.phone,
                10,
                "Please enter a valid phone number",
            );
            check_min_chars(
                &mut errors,
                FormField::DateOfBirth,
                &form.date_of_birth,
                1,
                "Date of birth is required",
            );
            check_min_chars(
                &mut errors,
                FormField::Ssn,
                &form.ssn,
                9,
                "SSN must be at least 9 characters",
            );
        }
        WizardStep::FinancialInfo => {
            check_required_positive(
                &mut errors,
                FormField::AnnualIncome,
                &form.annual_income,
                "Annual income is required",
            );
            // Monthly debt is the one optional numeric field: empty is fine.
            if !form.monthly_debt.is_empty()
                && !parse_number(&form.monthly_debt).is_some_and(|n| n >= Decimal::ZERO)
            {
                errors.insert(FormField::MonthlyDebt, "Must be a valid number");
            }
            if EmploymentStatus::parse(&form.employment_status).is_none() {
                errors.insert(
                    FormField::EmploymentStatus,
                    "Please select employment status",
                );
            }
            check_min_chars(
                &mut errors,
                FormField::Employer,
                &form.employer,
                1,
                "Employer is required",
            );
            check_min_chars(
                &mut errors,
                FormField::JobTitle,
                &form.job_title,
                1,
                "Job title is required",
            );
            check_required_non_negative(
                &mut errors,
                FormField::YearsEmployed,
                &form.years_employed,
                "Years employed is required",
            );
        }
        WizardStep::PropertyAndConsent => {
            check_min_chars(
                &mut errors,
                FormField::Address,
                &form.address,
                5,
                "Please enter a valid address",
            );
            check_min_chars(&mut errors, FormField::City, &form.city, 2, "City is required");
            if !is_state_code(&form.state) {
                errors.insert(FormField::State, "Please select a state");
            }
            check_min_chars(
                &mut errors,
                FormField::ZipCode,
                &form.zip_code,
                5,
                "Please enter a valid ZIP code",
            );
            if !form.agree_terms {
                errors.insert(FormField::AgreeTerms, "You must agree to the terms");
            }
            if !form.agree_credit_check {
                errors.insert(
                    FormField::AgreeCreditCheck,
                    "You must authorize credit check",
                );
            }
        }
    }
    errors
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern compiles")
    })
}

fn parse_number(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim()).ok()
}

/// Required field that must parse as a number strictly greater than zero.
fn check_required_positive(
    errors: &mut ValidationErrors,
    field: FormField,
    value: &str,
    required_message: &str,
) {
    if value.is_empty() {
        errors.insert(field, required_message);
    } else if !parse_number(value).is_some_and(|n| n > Decimal::ZERO) {
        errors.insert(field, "Must be a valid positive number");
    }
}

/// Required field that must parse as a number greater than or equal to zero.
fn check_required_non_negative(
    errors: &mut ValidationErrors,
    field: FormField,
    value: &str,
    required_message: &str,
) {
    if value.is_empty() {
        errors.insert(field, required_message);
    } else if !parse_number(value).is_some_and(|n| n >= Decimal::ZERO) {
        errors.insert(field, "Must be a valid number");
    }
}

fn check_min_chars(
    errors: &mut ValidationErrors,
    field: FormField,
    value: &str,
    min: usize,
    message: &str,
) {
    if value.chars().count() < min {
        errors.insert(field, message);
    }
}
