use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly payment broken out by component.
///
/// Each component is rounded to cents; `total_monthly_payment` is the exact
/// sum of the rounded components. Produced by
/// [`compute_breakdown`](crate::calculations::compute_breakdown) and never
/// stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Amortizing principal and interest.
    pub principal_and_interest: Decimal,
    /// Escrowed property tax (annual / 12).
    pub monthly_tax: Decimal,
    /// Escrowed homeowners insurance (annual / 12).
    pub monthly_insurance: Decimal,
    /// PMI, zero at or above 20% down.
    pub monthly_pmi: Decimal,
    /// HOA fee.
    pub monthly_hoa: Decimal,
    pub total_monthly_payment: Decimal,
}
