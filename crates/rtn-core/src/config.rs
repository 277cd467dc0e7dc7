use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rtn::PLACEHOLDER;

/// How CLI results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned `input  result` line per candidate.
    #[default]
    Text,
    /// One JSON object per candidate.
    Json,
}

/// Line handling for batch input files (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Skip lines starting with `#`.
    pub skip_comments: bool,
    /// Strip surrounding whitespace before checking a line.
    pub trim: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            skip_comments: true,
            trim: true,
        }
    }
}

/// Global configuration loaded from `~/.config/rtn/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RtnConfig {
    /// Character that marks the unknown digit for `missing` and `batch`.
    #[serde(default = "default_placeholder")]
    pub placeholder: char,
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Optional batch settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub batch: Option<BatchConfig>,
}

fn default_placeholder() -> char {
    PLACEHOLDER
}

impl Default for RtnConfig {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER,
            output_format: OutputFormat::Text,
            batch: None,
        }
    }
}

impl RtnConfig {
    /// Batch settings, falling back to defaults.
    pub fn batch(&self) -> BatchConfig {
        self.batch.clone().unwrap_or_default()
    }

    fn check(&self) -> Result<()> {
        let p = self.placeholder;
        if p.is_ascii_digit() {
            bail!("placeholder must not be a digit (got '{}')", p);
        }
        // Batch input trims whitespace and skips `#` comment lines.
        if !p.is_ascii_graphic() || p == '#' {
            bail!(
                "placeholder must be a printable ASCII character other than '#' (got {:?})",
                p
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rtn")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`.
pub fn load_from(path: &Path) -> Result<RtnConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RtnConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.check()?;
    Ok(cfg)
}

/// Write the default configuration to `path`, creating parent directories.
pub fn write_default(path: &Path) -> Result<RtnConfig> {
    let default_cfg = RtnConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(default_cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RtnConfig> {
    let path = config_path()?;
    if !path.exists() {
        return write_default(&path);
    }
    load_from(&path)
}
