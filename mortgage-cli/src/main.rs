use anyhow::Result;
use clap::{Parser, Subcommand};

mod application;
mod calculator;
mod display;
mod input;
mod logging;

/// HomeLend console tools: payment calculator and pre-approval application.
#[derive(Parser, Debug)]
#[command(name = "homelend")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive monthly payment calculator
    Calc(calculator::CalcArgs),
    /// Walk through the four-step pre-approval application
    Apply,
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calc(args) => calculator::run(args),
        Command::Apply => application::run(),
    }
}
