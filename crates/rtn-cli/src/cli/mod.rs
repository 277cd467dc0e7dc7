//! CLI for validating and repairing routing transit numbers.

mod commands;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rtn_core::config::{self, OutputFormat};
use std::io;
use std::path::PathBuf;

use commands::{run_batch, run_missing, run_validate};

/// Top-level CLI for the rtn tool.
#[derive(Debug, Parser)]
#[command(name = "rtn")]
#[command(about = "Validate and repair ABA routing transit numbers", long_about = None)]
pub struct Cli {
    /// Output format (overrides `output_format` in config.toml).
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check that each RTN is 9 digits with a correct check digit.
    Validate {
        /// Routing numbers to check.
        #[arg(required = true)]
        rtns: Vec<String>,
    },

    /// Recover the single digit marked by the placeholder in each RTN.
    Missing {
        /// Routing numbers with one digit replaced by the placeholder (default `X`).
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// Check or repair every line of a file (`-` for stdin).
    Batch {
        /// Input file, one candidate per line.
        path: PathBuf,
    },
}

impl CliCommand {
    /// Parse args, load config and dispatch. Returns whether every input passed.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let format = cli.format.map(OutputFormat::from).unwrap_or(cfg.output_format);
        let mut out = io::stdout().lock();

        let all_ok = match cli.command {
            CliCommand::Validate { rtns } => run_validate(&mut out, &rtns, format)?,
            CliCommand::Missing { candidates } => {
                run_missing(&mut out, &candidates, cfg.placeholder, format)?
            }
            CliCommand::Batch { path } => run_batch(&mut out, &path, &cfg, format)?,
        };

        Ok(all_ok)
    }
}

#[cfg(test)]
mod tests;
