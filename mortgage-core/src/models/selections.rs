//! Fixed option sets offered by the application form's select and radio
//! controls. Stored in the form as the raw selected token; parsed here when
//! a step is validated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPurpose {
    Purchase,
    Refinance,
    CashOut,
}

impl LoanPurpose {
    pub const ALL: [Self; 3] = [Self::Purchase, Self::Refinance, Self::CashOut];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Refinance => "refinance",
            Self::CashOut => "cashout",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "purchase" => Some(Self::Purchase),
            "refinance" => Some(Self::Refinance),
            "cashout" => Some(Self::CashOut),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    SingleFamily,
    Condo,
    Townhouse,
    MultiFamily,
}

impl PropertyType {
    pub const ALL: [Self; 4] = [
        Self::SingleFamily,
        Self::Condo,
        Self::Townhouse,
        Self::MultiFamily,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleFamily => "single-family",
            Self::Condo => "condo",
            Self::Townhouse => "townhouse",
            Self::MultiFamily => "multi-family",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single-family" => Some(Self::SingleFamily),
            "condo" => Some(Self::Condo),
            "townhouse" => Some(Self::Townhouse),
            "multi-family" => Some(Self::MultiFamily),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupancy {
    Primary,
    Secondary,
    Investment,
}

impl Occupancy {
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Investment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Investment => "investment",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "investment" => Some(Self::Investment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Employed,
    SelfEmployed,
    Retired,
    Student,
    Unemployed,
}

impl EmploymentStatus {
    pub const ALL: [Self; 5] = [
        Self::Employed,
        Self::SelfEmployed,
        Self::Retired,
        Self::Student,
        Self::Unemployed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::SelfEmployed => "self-employed",
            Self::Retired => "retired",
            Self::Student => "student",
            Self::Unemployed => "unemployed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "employed" => Some(Self::Employed),
            "self-employed" => Some(Self::SelfEmployed),
            "retired" => Some(Self::Retired),
            "student" => Some(Self::Student),
            "unemployed" => Some(Self::Unemployed),
            _ => None,
        }
    }
}

/// USPS two-letter codes for the fifty states plus DC.
pub const STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Whether `s` is a recognized state code.
pub fn is_state_code(s: &str) -> bool {
    STATE_CODES.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_purpose_round_trips_tokens() {
        for token in ["purchase", "refinance", "cashout"] {
            assert_eq!(LoanPurpose::parse(token).unwrap().as_str(), token);
        }
        assert_eq!(LoanPurpose::parse("heloc"), None);
        assert_eq!(LoanPurpose::parse(""), None);
    }

    #[test]
    fn property_type_round_trips_tokens() {
        for token in ["single-family", "condo", "townhouse", "multi-family"] {
            assert_eq!(PropertyType::parse(token).unwrap().as_str(), token);
        }
        assert_eq!(PropertyType::parse("houseboat"), None);
    }

    #[test]
    fn occupancy_round_trips_tokens() {
        for token in ["primary", "secondary", "investment"] {
            assert_eq!(Occupancy::parse(token).unwrap().as_str(), token);
        }
        assert_eq!(Occupancy::parse("rental"), None);
    }

    #[test]
    fn employment_status_round_trips_tokens() {
        for token in ["employed", "self-employed", "retired", "student", "unemployed"] {
            assert_eq!(EmploymentStatus::parse(token).unwrap().as_str(), token);
        }
        assert_eq!(EmploymentStatus::parse("contractor"), None);
    }

    #[test]
    fn all_lists_round_trip_through_parse() {
        for purpose in LoanPurpose::ALL {
            assert_eq!(LoanPurpose::parse(purpose.as_str()), Some(purpose));
        }
        for property in PropertyType::ALL {
            assert_eq!(PropertyType::parse(property.as_str()), Some(property));
        }
        for occupancy in Occupancy::ALL {
            assert_eq!(Occupancy::parse(occupancy.as_str()), Some(occupancy));
        }
        for status in EmploymentStatus::ALL {
            assert_eq!(EmploymentStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn state_codes_cover_fifty_states_and_dc() {
        assert_eq!(STATE_CODES.len(), 51);
        assert!(is_state_code("CA"));
        assert!(is_state_code("WY"));
        assert!(!is_state_code("ca"));
        assert!(!is_state_code("ZZ"));
        assert!(!is_state_code(""));
    }
}
