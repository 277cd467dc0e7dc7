//! Missing command: recover the placeholder digit in each candidate.

use anyhow::Result;
use rtn_core::config::OutputFormat;
use std::io::Write;

use crate::cli::report::Outcome;

/// Print one result line per candidate. Returns true if every candidate was repaired.
pub fn run_missing(
    out: &mut impl Write,
    candidates: &[String],
    placeholder: char,
    format: OutputFormat,
) -> Result<bool> {
    let mut all_ok = true;
    for candidate in candidates {
        let result = rtn_core::repair_digit_with(candidate, placeholder);
        match &result {
            Ok((digit, rtn)) => tracing::debug!(candidate = %candidate, digit, rtn = %rtn, "repaired"),
            Err(e) => {
                tracing::debug!(candidate = %candidate, error = %e, "repair failed");
                all_ok = false;
            }
        }
        Outcome::repaired(candidate, result).write(out, format)?;
    }
    Ok(all_ok)
}
