//! Validate command: checksum-check each RTN given on the command line.

use anyhow::Result;
use rtn_core::config::OutputFormat;
use std::io::Write;

use crate::cli::report::Outcome;

/// Print one result line per RTN. Returns true if all of them are valid.
pub fn run_validate(out: &mut impl Write, rtns: &[String], format: OutputFormat) -> Result<bool> {
    let mut all_ok = true;
    for rtn in rtns {
        let result = rtn_core::validate(rtn);
        if let Err(e) = result {
            tracing::debug!(rtn = %rtn, error = %e, "validation failed");
            all_ok = false;
        }
        Outcome::validated(rtn, result).write(out, format)?;
    }
    Ok(all_ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_inputs_report_failure() {
        let rtns = vec!["322286188".to_string(), "123456789".to_string()];
        let mut buf = Vec::new();
        let all_ok = run_validate(&mut buf, &rtns, OutputFormat::Text).unwrap();
        assert!(!all_ok);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "322286188  ok\n123456789  checksum mismatch\n"
        );
    }

    #[test]
    fn all_valid() {
        let rtns = vec!["021200025".to_string(), "026014601".to_string()];
        let mut buf = Vec::new();
        assert!(run_validate(&mut buf, &rtns, OutputFormat::Json).unwrap());
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 2);
    }
}
