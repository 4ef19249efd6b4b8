//! Interactive payment calculator session.
//!
//! Mirrors the calculator page: a parameter snapshot the user edits one
//! field at a time, with the breakdown recomputed synchronously after every
//! mutation. There is no implicit reactivity here; every edit path calls
//! [`compute_breakdown`] explicitly.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use mortgage_core::LoanParameters;
use mortgage_core::calculations::compute_breakdown;

use crate::display;
use crate::input;

/// Starting values for the session; anything omitted keeps the page default
/// (400k home, 20% down, 30 years at 6.5%).
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Home price in dollars
    #[arg(long)]
    price: Option<Decimal>,

    /// Down payment in dollars
    #[arg(long)]
    down: Option<Decimal>,

    /// Down payment as a percentage of the home price
    #[arg(long, conflicts_with = "down")]
    down_percent: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    term: Option<u32>,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: Option<Decimal>,

    /// Annual property tax in dollars
    #[arg(long)]
    tax: Option<Decimal>,

    /// Annual home insurance in dollars
    #[arg(long)]
    insurance: Option<Decimal>,

    /// Monthly PMI charge in dollars
    #[arg(long)]
    pmi: Option<Decimal>,

    /// Monthly HOA fee in dollars
    #[arg(long)]
    hoa: Option<Decimal>,

    /// Print a single breakdown and exit instead of starting a session
    #[arg(long)]
    once: bool,
}

impl CalcArgs {
    fn into_parameters(self) -> LoanParameters {
        let mut params = LoanParameters::default();
        if let Some(price) = self.price {
            params.home_price = price;
        }
        if let Some(term) = self.term {
            params.loan_term_years = term;
        }
        if let Some(rate) = self.rate {
            params.annual_interest_rate_percent = rate;
        }
        if let Some(tax) = self.tax {
            params.annual_property_tax = tax;
        }
        if let Some(insurance) = self.insurance {
            params.annual_home_insurance = insurance;
        }
        if let Some(pmi) = self.pmi {
            params.monthly_pmi = pmi;
        }
        if let Some(hoa) = self.hoa {
            params.monthly_hoa = hoa;
        }
        // Down payment last so the derived twin reflects the final price.
        if let Some(down) = self.down {
            params.set_down_payment(down);
        } else if let Some(percent) = self.down_percent {
            params.set_down_payment_percent(percent);
        } else {
            params.set_down_payment_percent(params.down_payment_percent);
        }
        params
    }
}

pub fn run(args: CalcArgs) -> Result<()> {
    let once = args.once;
    let mut params = args.into_parameters();

    let breakdown = compute_breakdown(&params);
    display::print_breakdown(&params, &breakdown);
    if once {
        return Ok(());
    }

    println!();
    println!("Edit a value to recalculate. Commands:");
    print_command_help();

    loop {
        let Some(line) = input::read_line("calc> ")? else {
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "price" => params.home_price = input::parse_amount(argument),
            "down" => params.set_down_payment(input::parse_amount(argument)),
            "down%" => params.set_down_payment_percent(input::parse_amount(argument)),
            "term" => params.loan_term_years = input::parse_whole(argument),
            "rate" => params.annual_interest_rate_percent = input::parse_amount(argument),
            "tax" => params.annual_property_tax = input::parse_amount(argument),
            "insurance" => params.annual_home_insurance = input::parse_amount(argument),
            "pmi" => params.monthly_pmi = input::parse_amount(argument),
            "hoa" => params.monthly_hoa = input::parse_amount(argument),
            "show" => {}
            "help" => {
                print_command_help();
                continue;
            }
            "quit" | "q" | "exit" => return Ok(()),
            other => {
                println!("Unknown command '{other}'; type 'help' for the list.");
                continue;
            }
        }

        // Recompute on every edit, same as the page does per keystroke.
        let breakdown = compute_breakdown(&params);
        display::print_breakdown(&params, &breakdown);
    }
}

fn print_command_help() {
    println!("  price <amt>      home price");
    println!("  down <amt>       down payment in dollars (percent follows)");
    println!("  down% <pct>      down payment as a percent (amount follows)");
    println!("  term <years>     loan term");
    println!("  rate <pct>       annual interest rate");
    println!("  tax <amt>        annual property tax");
    println!("  insurance <amt>  annual home insurance");
    println!("  pmi <amt>        monthly PMI charge");
    println!("  hoa <amt>        monthly HOA fee");
    println!("  show             reprint the breakdown");
    println!("  quit             leave the calculator");
}
