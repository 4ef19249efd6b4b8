use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs to the monthly payment calculation.
///
/// All monetary fields are raw dollar amounts; `annual_interest_rate_percent`
/// and `down_payment_percent` are percentages (6.5 means 6.5%). The down
/// payment is tracked both as an amount and as a percentage of the home
/// price; whichever the user edited last is authoritative and the other is
/// derived through [`set_down_payment`](Self::set_down_payment) or
/// [`set_down_payment_percent`](Self::set_down_payment_percent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub home_price: Decimal,
    pub down_payment: Decimal,
    pub down_payment_percent: Decimal,
    pub loan_term_years: u32,
    pub annual_interest_rate_percent: Decimal,

    /// Annual property tax, escrowed monthly.
    pub annual_property_tax: Decimal,
    /// Annual homeowners insurance premium, escrowed monthly.
    pub annual_home_insurance: Decimal,
    /// Monthly PMI charge, applied only below the 20% down cutoff.
    pub monthly_pmi: Decimal,
    /// Monthly HOA fee, passed through unchanged.
    pub monthly_hoa: Decimal,
}

impl Default for LoanParameters {
    /// Starting values shown on the calculator before any edits.
    fn default() -> Self {
        Self {
            home_price: Decimal::from(400_000),
            down_payment: Decimal::from(80_000),
            down_payment_percent: Decimal::from(20),
            loan_term_years: 30,
            annual_interest_rate_percent: Decimal::new(65, 1),
            annual_property_tax: Decimal::from(4_800),
            annual_home_insurance: Decimal::from(1_200),
            monthly_pmi: Decimal::from(200),
            monthly_hoa: Decimal::ZERO,
        }
    }
}

impl LoanParameters {
    /// Sets the down payment amount and derives the percentage from the
    /// current home price.
    ///
    /// A home price of zero leaves the percentage at zero rather than
    /// dividing by zero.
    pub fn set_down_payment(
        &mut self,
        amount: Decimal,
    ) {
        self.down_payment = amount;
        self.down_payment_percent = if self.home_price.is_zero() {
            Decimal::ZERO
        } else {
            amount / self.home_price * Decimal::ONE_HUNDRED
        };
    }

    /// Sets the down payment percentage and derives the amount from the
    /// current home price.
    pub fn set_down_payment_percent(
        &mut self,
        percent: Decimal,
    ) {
        self.down_payment_percent = percent;
        self.down_payment = self.home_price * percent / Decimal::ONE_HUNDRED;
    }

    /// The amount financed.
    ///
    /// May be negative when the down payment exceeds the home price; that
    /// value propagates into the payment calculation unguarded.
    pub fn loan_amount(&self) -> Decimal {
        self.home_price - self.down_payment
    }
}
