use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::warn;

/// Parses a dollar or percent amount the way the calculator's number inputs
/// do: surrounding whitespace and comma separators are tolerated, and
/// anything unparseable (including empty input) is coerced to zero so the
/// pure computation downstream never sees a non-number. The coercion is
/// logged so a typo doesn't silently zero a field without a trace.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|_| {
        warn!(input = %s, "not a number, treating as 0");
        Decimal::ZERO
    })
}

/// Same coercion policy for whole-number inputs (the loan term).
pub fn parse_whole(s: &str) -> u32 {
    let trimmed = s.trim();
    trimmed.parse().unwrap_or_else(|_| {
        warn!(input = %s, "not a whole number, treating as 0");
        0
    })
}

/// Prints `prompt`, flushes, and reads one trimmed line from stdin.
/// Returns `None` at end of input.
pub fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading input")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
