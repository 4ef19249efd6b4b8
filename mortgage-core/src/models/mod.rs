mod application;
mod loan_parameters;
mod payment_breakdown;
mod selections;

pub use application::{ApplicationForm, FieldValue, FormField};
pub use loan_parameters::LoanParameters;
pub use payment_breakdown::PaymentBreakdown;
pub use selections::{
    EmploymentStatus, LoanPurpose, Occupancy, PropertyType, is_state_code, STATE_CODES,
};
