//! Monthly payment breakdown for a fixed-rate amortizing mortgage.
//!
//! Given [`LoanParameters`], [`compute_breakdown`] produces the five payment
//! components and their total:
//!
//! | Component | Source |
//! |-----------|--------|
//! | Principal & interest | `L·r·(1+r)^n / ((1+r)^n − 1)` over the loan amount |
//! | Property tax | annual amount / 12 |
//! | Home insurance | annual amount / 12 |
//! | PMI | the configured monthly charge below 20% down, else 0 |
//! | HOA | monthly amount, unchanged |
//!
//! where `r` is the monthly rate (annual % / 100 / 12) and `n` the number of
//! monthly payments. A zero interest rate amortizes linearly (`L / n`), the
//! conventional amortization-table reading of the otherwise-undefined
//! formula. The computation is pure and infallible; callers are expected to
//! hand in numeric values, coercing anything unparseable to zero first.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::LoanParameters;
//! use mortgage_core::calculations::compute_breakdown;
//!
//! // 400k home, 20% down, 30 years at 6.5%
//! let params = LoanParameters::default();
//! let breakdown = compute_breakdown(&params);
//!
//! assert_eq!(breakdown.monthly_tax, dec!(400.00));
//! assert_eq!(breakdown.monthly_pmi, dec!(0.00)); // 20% down waives PMI
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{compound, round_half_up};
use crate::models::{LoanParameters, PaymentBreakdown};

/// Down payment percentage at or above which PMI is waived. Lender policy,
/// not user-overridable.
fn pmi_waiver_cutoff() -> Decimal {
    Decimal::from(20)
}

/// Computes the full monthly payment breakdown.
///
/// Each component is rounded to cents before summing, so the total is
/// always the exact sum of the displayed components. A down payment larger
/// than the home price produces a negative loan amount and a negative
/// payment; that propagates rather than being clamped.
pub fn compute_breakdown(params: &LoanParameters) -> PaymentBreakdown {
    let months_per_year = Decimal::from(12);
    let monthly_rate =
        params.annual_interest_rate_percent / Decimal::ONE_HUNDRED / months_per_year;
    let payments = params.loan_term_years * 12;

    let principal_and_interest = round_half_up(principal_and_interest(
        params.loan_amount(),
        monthly_rate,
        payments,
    ));
    let monthly_tax = round_half_up(params.annual_property_tax / months_per_year);
    let monthly_insurance = round_half_up(params.annual_home_insurance / months_per_year);
    let monthly_pmi = if params.down_payment_percent < pmi_waiver_cutoff() {
        round_half_up(params.monthly_pmi)
    } else {
        Decimal::ZERO
    };
    let monthly_hoa = round_half_up(params.monthly_hoa);

    let total_monthly_payment =
        principal_and_interest + monthly_tax + monthly_insurance + monthly_pmi + monthly_hoa;

    PaymentBreakdown {
        principal_and_interest,
        monthly_tax,
        monthly_insurance,
        monthly_pmi,
        monthly_hoa,
        total_monthly_payment,
    }
}

/// Interest paid over the life of the loan: P&I times the number of
/// payments, less the amount financed.
pub fn total_interest(
    params: &LoanParameters,
    breakdown: &PaymentBreakdown,
) -> Decimal {
    let payments = Decimal::from(params.loan_term_years * 12);
    breakdown.principal_and_interest * payments - params.loan_amount()
}

/// The amortizing-loan payment.
///
/// Zero payments would divide by zero in both branches, so a zero-year term
/// yields a zero payment instead.
fn principal_and_interest(
    loan_amount: Decimal,
    monthly_rate: Decimal,
    payments: u32,
) -> Decimal {
    if payments == 0 {
        return Decimal::ZERO;
    }
    if monthly_rate.is_zero() {
        return loan_amount / Decimal::from(payments);
    }
    let growth = compound(monthly_rate, payments);
    loan_amount * monthly_rate * growth / (growth - Decimal::ONE)
}
