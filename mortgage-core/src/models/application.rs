use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Identifies one field of the application form.
///
/// Declaration order follows the wizard's step order, so ordered maps keyed
/// by `FormField` list errors in the order the fields appear on screen. The
/// string form is the field's wire key (`"homePrice"`, `"agreeTerms"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FormField {
    // Step 1: home & loan details
    HomePrice,
    DownPayment,
    LoanPurpose,
    PropertyType,
    Occupancy,

    // Step 2: personal information
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Ssn,

    // Step 3: financial information
    AnnualIncome,
    MonthlyDebt,
    EmploymentStatus,
    Employer,
    JobTitle,
    YearsEmployed,

    // Step 4: property location & consents
    Address,
    City,
    State,
    ZipCode,
    AgreeTerms,
    AgreeCreditCheck,
    AgreeMarketing,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HomePrice => "homePrice",
            Self::DownPayment => "downPayment",
            Self::LoanPurpose => "loanPurpose",
            Self::PropertyType => "propertyType",
            Self::Occupancy => "occupancy",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::DateOfBirth => "dateOfBirth",
            Self::Ssn => "ssn",
            Self::AnnualIncome => "annualIncome",
            Self::MonthlyDebt => "monthlyDebt",
            Self::EmploymentStatus => "employmentStatus",
            Self::Employer => "employer",
            Self::JobTitle => "jobTitle",
            Self::YearsEmployed => "yearsEmployed",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::AgreeTerms => "agreeTerms",
            Self::AgreeCreditCheck => "agreeCreditCheck",
            Self::AgreeMarketing => "agreeMarketing",
        }
    }

    /// Human-readable label, as shown next to the form control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HomePrice => "Home Price",
            Self::DownPayment => "Down Payment",
            Self::LoanPurpose => "Loan Purpose",
            Self::PropertyType => "Property Type",
            Self::Occupancy => "Occupancy",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::DateOfBirth => "Date of Birth",
            Self::Ssn => "Social Security Number",
            Self::AnnualIncome => "Annual Income",
            Self::MonthlyDebt => "Monthly Debt Payments",
            Self::EmploymentStatus => "Employment Status",
            Self::Employer => "Employer",
            Self::JobTitle => "Job Title",
            Self::YearsEmployed => "Years Employed",
            Self::Address => "Property Address",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "ZIP Code",
            Self::AgreeTerms => "Terms of Service Agreement",
            Self::AgreeCreditCheck => "Credit Check Authorization",
            Self::AgreeMarketing => "Marketing Updates",
        }
    }

    /// Whether this field holds a checkbox flag rather than text.
    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            Self::AgreeTerms | Self::AgreeCreditCheck | Self::AgreeMarketing
        )
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One already-typed value arriving from a form control: text inputs and
/// selects produce `Text`, checkboxes produce `Flag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

/// The single flat record behind all four wizard steps.
///
/// Text fields hold whatever the user typed or selected, unparsed; numeric
/// interpretation happens at validation time. The record starts empty and is
/// only ever mutated one field at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    // Step 1: home & loan details
    pub home_price: String,
    pub down_payment: String,
    pub loan_purpose: String,
    pub property_type: String,
    pub occupancy: String,

    // Step 2: personal information
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub ssn: String,

    // Step 3: financial information
    pub annual_income: String,
    pub monthly_debt: String,
    pub employment_status: String,
    pub employer: String,
    pub job_title: String,
    pub years_employed: String,

    // Step 4: property location
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,

    // Consents
    pub agree_terms: bool,
    pub agree_credit_check: bool,
    pub agree_marketing: bool,
}

impl ApplicationForm {
    /// Applies one field edit. Returns `true` when the value kind matched
    /// the field and the edit was stored; a mismatched kind is logged and
    /// dropped.
    pub fn set(
        &mut self,
        field: FormField,
        value: FieldValue,
    ) -> bool {
        match value {
            FieldValue::Text(text) => {
                let slot = match field {
                    FormField::HomePrice => &mut self.home_price,
                    FormField::DownPayment => &mut self.down_payment,
                    FormField::LoanPurpose => &mut self.loan_purpose,
                    FormField::PropertyType => &mut self.property_type,
                    FormField::Occupancy => &mut self.occupancy,
                    FormField::FirstName => &mut self.first_name,
                    FormField::LastName => &mut self.last_name,
                    FormField::Email => &mut self.email,
                    FormField::Phone => &mut self.phone,
                    FormField::DateOfBirth => &mut self.date_of_birth,
                    FormField::Ssn => &mut self.ssn,
                    FormField::AnnualIncome => &mut self.annual_income,
                    FormField::MonthlyDebt => &mut self.monthly_debt,
                    FormField::EmploymentStatus => &mut self.employment_status,
                    FormField::Employer => &mut self.employer,
                    FormField::JobTitle => &mut self.job_title,
                    FormField::YearsEmployed => &mut self.years_employed,
                    FormField::Address => &mut self.address,
                    FormField::City => &mut self.city,
                    FormField::State => &mut self.state,
                    FormField::ZipCode => &mut self.zip_code,
                    FormField::AgreeTerms
                    | FormField::AgreeCreditCheck
                    | FormField::AgreeMarketing => {
                        warn!(field = %field, "dropping text edit aimed at a checkbox field");
                        return false;
                    }
                };
                *slot = text;
                true
            }
            FieldValue::Flag(flag) => {
                let slot = match field {
                    FormField::AgreeTerms => &mut self.agree_terms,
                    FormField::AgreeCreditCheck => &mut self.agree_credit_check,
                    FormField::AgreeMarketing => &mut self.agree_marketing,
                    _ => {
                        warn!(field = %field, "dropping flag edit aimed at a text field");
                        return false;
                    }
                };
                *slot = flag;
                true
            }
        }
    }

    /// Current text of a field, or `None` for checkbox fields.
    pub fn text(
        &self,
        field: FormField,
    ) -> Option<&str> {
        let text = match field {
            FormField::HomePrice => &self.home_price,
            FormField::DownPayment => &self.down_payment,
            FormField::LoanPurpose => &self.loan_purpose,
            FormField::PropertyType => &self.property_type,
            FormField::Occupancy => &self.occupancy,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::DateOfBirth => &self.date_of_birth,
            FormField::Ssn => &self.ssn,
            FormField::AnnualIncome => &self.annual_income,
            FormField::MonthlyDebt => &self.monthly_debt,
            FormField::EmploymentStatus => &self.employment_status,
            FormField::Employer => &self.employer,
            FormField::JobTitle => &self.job_title,
            FormField::YearsEmployed => &self.years_employed,
            FormField::Address => &self.address,
            FormField::City => &self.city,
            FormField::State => &self.state,
            FormField::ZipCode => &self.zip_code,
            FormField::AgreeTerms
            | FormField::AgreeCreditCheck
            | FormField::AgreeMarketing => return None,
        };
        Some(text)
    }

    /// Current state of a checkbox field, or `None` for text fields.
    pub fn flag(
        &self,
        field: FormField,
    ) -> Option<bool> {
        match field {
            FormField::AgreeTerms => Some(self.agree_terms),
            FormField::AgreeCreditCheck => Some(self.agree_credit_check),
            FormField::AgreeMarketing => Some(self.agree_marketing),
            _ => None,
        }
    }
}
