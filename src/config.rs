use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use kalends_period::{PeriodKind, TrimPolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_PATH: &str = "kalends.toml";

/// Top-level Kalends configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KalendsConfig {
    /// Term selection settings.
    #[serde(default)]
    pub terms: TermsToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TermsToml {
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default)]
    pub trim_leading: bool,
    #[serde(default)]
    pub trim_trailing: bool,
}

impl Default for TermsToml {
    fn default() -> Self {
        Self {
            period: default_period(),
            trim_leading: false,
            trim_trailing: false,
        }
    }
}

fn default_period() -> String {
    "month".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per item.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

impl KalendsConfig {
    /// Resolves the period kind, preferring the command-line value.
    pub fn period_kind(&self, cli: Option<PeriodKind>) -> Result<PeriodKind> {
        match cli {
            Some(kind) => Ok(kind),
            None => self
                .terms
                .period
                .parse()
                .with_context(|| format!("invalid [terms].period '{}'", self.terms.period)),
        }
    }

    /// Resolves the trim policy; each command-line flag overrides its config value.
    pub fn trim_policy(&self, leading: Option<bool>, trailing: Option<bool>) -> TrimPolicy {
        TrimPolicy::new(
            leading.unwrap_or(self.terms.trim_leading),
            trailing.unwrap_or(self.terms.trim_trailing),
        )
    }

    /// Resolves the output format, preferring the command-line value.
    pub fn output_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.unwrap_or(self.output.format)
    }
}

/// Loads the configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read if present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<KalendsConfig> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_PATH);
            if !default.is_file() {
                debug!("no config file, using defaults");
                return Ok(KalendsConfig::default());
            }
            default
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: KalendsConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}
