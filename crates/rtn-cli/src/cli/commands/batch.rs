//! Batch command: check or repair every candidate in a file or stdin.
//!
//! Lines containing the placeholder are repaired; all others are validated.

use anyhow::{Context, Result};
use rtn_core::config::{BatchConfig, OutputFormat, RtnConfig};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::cli::report::Outcome;

/// Run the batch over `path` (`-` means stdin). Returns true if every line passed.
pub fn run_batch(
    out: &mut impl Write,
    path: &Path,
    cfg: &RtnConfig,
    format: OutputFormat,
) -> Result<bool> {
    if path == Path::new("-") {
        let stdin = io::stdin().lock();
        return process_lines(out, stdin, "<stdin>", cfg, format);
    }
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    process_lines(
        out,
        BufReader::new(file),
        &path.display().to_string(),
        cfg,
        format,
    )
}

/// Returns the candidate on this line, or None if the line should be skipped.
fn candidate<'a>(line: &'a str, batch: &BatchConfig) -> Option<&'a str> {
    let line = if batch.trim {
        line.trim()
    } else {
        line.trim_end_matches(['\r', '\n'])
    };
    if line.is_empty() || (batch.skip_comments && line.starts_with('#')) {
        return None;
    }
    Some(line)
}

fn process_lines(
    out: &mut impl Write,
    reader: impl BufRead,
    source: &str,
    cfg: &RtnConfig,
    format: OutputFormat,
) -> Result<bool> {
    let batch = cfg.batch();
    let mut checked = 0usize;
    let mut failed = 0usize;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read {} line {}", source, lineno + 1))?;
        let Some(input) = candidate(&line, &batch) else {
            continue;
        };

        let outcome = if input.contains(cfg.placeholder) {
            Outcome::repaired(input, rtn_core::repair_digit_with(input, cfg.placeholder))
        } else {
            Outcome::validated(input, rtn_core::validate(input))
        };
        checked += 1;
        if !outcome.ok {
            failed += 1;
        }
        outcome.write(out, format)?;
    }

    tracing::info!(source, checked, failed, "batch finished");
    Ok(failed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, cfg: &RtnConfig) -> (bool, String) {
        let mut buf = Vec::new();
        let ok = process_lines(&mut buf, Cursor::new(input), "test", cfg, OutputFormat::Text)
            .unwrap();
        (ok, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn mixes_validation_and_repair() {
        let input = "# header\n322286188\n\n  03110064X  \n123456789\n";
        let (ok, out) = run(input, &RtnConfig::default());
        assert!(!ok);
        assert_eq!(
            out,
            "322286188  ok\n03110064X  9  031100649\n123456789  checksum mismatch\n"
        );
    }

    #[test]
    fn all_good_lines() {
        let (ok, out) = run("021200025\n111000025\r\n", &RtnConfig::default());
        assert!(ok);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn untrimmed_lines_keep_whitespace() {
        let cfg = RtnConfig {
            batch: Some(BatchConfig {
                skip_comments: false,
                trim: false,
            }),
            ..RtnConfig::default()
        };
        let (ok, out) = run(" 322286188\n#12345678\n", &cfg);
        assert!(!ok);
        assert_eq!(
            out,
            " 322286188  incorrect length\n#12345678  invalid character\n"
        );
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rtns.txt");
        std::fs::write(&path, "X22286188\n").unwrap();
        let mut buf = Vec::new();
        let ok = run_batch(&mut buf, &path, &RtnConfig::default(), OutputFormat::Json).unwrap();
        assert!(ok);
        let v: serde_json::Value =
            serde_json::from_str(String::from_utf8(buf).unwrap().trim_end()).unwrap();
        assert_eq!(v["digit"], 3);
        assert_eq!(v["rtn"], "322286188");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut buf = Vec::new();
        let err = run_batch(
            &mut buf,
            &dir.path().join("nope.txt"),
            &RtnConfig::default(),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(err.to_string().contains("open"));
    }
}
