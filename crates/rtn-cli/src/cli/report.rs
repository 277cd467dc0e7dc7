//! Per-candidate result lines in text or JSON.

use anyhow::Result;
use rtn_core::config::OutputFormat;
use rtn_core::{Rtn, RtnError};
use serde::Serialize;
use std::io::Write;

/// Outcome of checking or repairing one input.
#[derive(Debug, Serialize)]
pub struct Outcome {
    pub input: String,
    pub ok: bool,
    pub digit: Option<u8>,
    pub rtn: Option<String>,
    pub error: Option<String>,
}

impl Outcome {
    pub fn validated(input: &str, result: Result<(), RtnError>) -> Self {
        Self {
            input: input.to_owned(),
            ok: result.is_ok(),
            digit: None,
            rtn: result.is_ok().then(|| input.to_owned()),
            error: result.err().map(|e| e.to_string()),
        }
    }

    pub fn repaired(input: &str, result: Result<(u8, Rtn), RtnError>) -> Self {
        match result {
            Ok((digit, rtn)) => Self {
                input: input.to_owned(),
                ok: true,
                digit: Some(digit),
                rtn: Some(rtn.to_string()),
                error: None,
            },
            Err(e) => Self {
                input: input.to_owned(),
                ok: false,
                digit: None,
                rtn: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn write(&self, out: &mut impl Write, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Text => match (&self.error, self.digit, &self.rtn) {
                (Some(err), _, _) => writeln!(out, "{}  {}", self.input, err)?,
                (None, Some(digit), Some(rtn)) => {
                    writeln!(out, "{}  {}  {}", self.input, digit, rtn)?
                }
                (None, _, _) => writeln!(out, "{}  ok", self.input)?,
            },
        }
        Ok(())
    }
}
