use mortgage_core::calculations::total_interest;
use mortgage_core::{LoanParameters, PaymentBreakdown};
use rust_decimal::Decimal;

/// Formats a dollar amount for display: whole dollars, thousands separators,
/// sign ahead of the currency symbol.
pub fn currency(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < Decimal::ZERO {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Prints the payment breakdown and loan summary.
///
/// PMI and HOA rows are hidden when zero, matching the calculator page.
pub fn print_breakdown(
    params: &LoanParameters,
    breakdown: &PaymentBreakdown,
) {
    println!();
    println!(
        "Total monthly payment: {}",
        currency(breakdown.total_monthly_payment)
    );
    println!(
        "  Principal & Interest   {:>12}",
        currency(breakdown.principal_and_interest)
    );
    println!("  Property Tax           {:>12}", currency(breakdown.monthly_tax));
    println!(
        "  Home Insurance         {:>12}",
        currency(breakdown.monthly_insurance)
    );
    if breakdown.monthly_pmi > Decimal::ZERO {
        println!("  PMI                    {:>12}", currency(breakdown.monthly_pmi));
    }
    if breakdown.monthly_hoa > Decimal::ZERO {
        println!("  HOA Fees               {:>12}", currency(breakdown.monthly_hoa));
    }
    println!(
        "Loan amount {} | Down payment {} ({}%) | Lifetime interest {}",
        currency(params.loan_amount()),
        currency(params.down_payment),
        params.down_payment_percent.round_dp(1),
        currency(total_interest(params, breakdown)),
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(dec!(0)), "$0");
        assert_eq!(currency(dec!(999)), "$999");
        assert_eq!(currency(dec!(1000)), "$1,000");
        assert_eq!(currency(dec!(2522.62)), "$2,523");
        assert_eq!(currency(dec!(1234567.89)), "$1,234,568");
    }

    #[test]
    fn currency_keeps_sign_outside_the_symbol() {
        assert_eq!(currency(dec!(-1200)), "-$1,200");
    }

    #[test]
    fn currency_rounds_half_up_to_whole_dollars() {
        assert_eq!(currency(dec!(999.5)), "$1,000");
        assert_eq!(currency(dec!(999.49)), "$999");
    }
}
