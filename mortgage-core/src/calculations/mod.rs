//! Monthly payment math for the mortgage calculator.

pub mod common;
pub mod payment;

pub use payment::{compute_breakdown, total_interest};
