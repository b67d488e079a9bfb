//! Configuration loading for the validator runner.
//!
//! Loads `validators.toml` with per-section defaults. All sections use
//! `#[serde(default)]` so a minimal or empty config file is valid.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::validator::Settings;
use crate::validators;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "ASSURANCE_VALIDATORS_CONFIG";

/// Config file name under the config directory.
pub const CONFIG_FILE_NAME: &str = "validators.toml";

/// Problems a parsed config can have.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A validator list names a validator that does not exist.
    #[error("unknown validator '{name}' in [validators].{list}")]
    UnknownValidator {
        /// Offending name.
        name: String,
        /// `enabled` or `disabled`.
        list: &'static str,
    },

    /// A validator is both enabled and disabled.
    #[error("validator '{0}' is both enabled and disabled")]
    Conflicting(String),

    /// The log level is not a tracing level.
    #[error("logging.level must be one of trace, debug, info, warn, error (got '{0}')")]
    InvalidLevel(String),
}

/// Top-level runner configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidatorsConfig {
    /// Which validators run.
    #[serde(default)]
    pub validators: SelectionConfig,

    /// How verdicts are printed.
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level and optional log directory.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Settings handed to every validator.
    #[serde(default)]
    pub settings: Settings,
}

/// Validator selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionConfig {
    /// Validators to run. Empty means all of them.
    #[serde(default)]
    pub enabled: Vec<String>,

    /// Validators to skip.
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Output format for verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One block per validator, for people.
    #[default]
    Text,
    /// One JSON document, for tools.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Verdict format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for JSON log files. Console only when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_owned()
}

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl ValidatorsConfig {
    /// Check that every named validator exists and the log level is valid.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let known = validators::names();
        let lists = [
            ("enabled", &self.validators.enabled),
            ("disabled", &self.validators.disabled),
        ];
        for (list, names) in lists {
            if let Some(name) = names.iter().find(|n| !known.iter().any(|k| *k == n.as_str())) {
                return Err(ConfigError::UnknownValidator {
                    name: name.clone(),
                    list,
                });
            }
        }
        if let Some(name) = self
            .validators
            .enabled
            .iter()
            .find(|n| self.validators.disabled.contains(n))
        {
            return Err(ConfigError::Conflicting(name.clone()));
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LEVELS.iter().any(|l| *l == level) {
            return Err(ConfigError::InvalidLevel(self.logging.level.clone()));
        }
        Ok(())
    }

    /// Whether a validator should run under this selection.
    pub fn is_selected(&self, name: &str) -> bool {
        let selection = &self.validators;
        let enabled = selection.enabled.is_empty() || selection.enabled.iter().any(|n| n == name);
        enabled && !selection.disabled.iter().any(|n| n == name)
    }
}

/// Parse and validate a config from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid TOML for this schema or fails
/// validation.
pub fn parse_config(contents: &str) -> anyhow::Result<ValidatorsConfig> {
    let config: ValidatorsConfig = toml::from_str(contents).context("failed to parse config")?;
    config.validate()?;
    Ok(config)
}

/// Load a config from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub fn load_config(path: &Path) -> anyhow::Result<ValidatorsConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config at {}", path.display()))
}

/// Directory holding the default config (`~/.assurance`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".assurance"))
}

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named explicitly by flag or environment; must exist.
    Explicit(PathBuf),
    /// The default location; may be absent.
    Default(PathBuf),
}

/// Resolve the config path: flag, then environment, then the default.
///
/// Takes an env resolver so tests avoid mutating the process environment.
///
/// # Errors
///
/// Returns an error if the default location cannot be determined.
pub fn resolve_config_path(
    flag: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ConfigSource> {
    if let Some(path) = flag {
        return Ok(ConfigSource::Explicit(path.to_path_buf()));
    }
    if let Some(path) = env(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(ConfigSource::Explicit(PathBuf::from(path)));
    }
    Ok(ConfigSource::Default(config_dir()?.join(CONFIG_FILE_NAME)))
}

/// Load the config from its resolved source. A missing default file yields
/// the defaults.
///
/// # Errors
///
/// Returns an error if an explicit file is missing or any file is invalid.
pub fn load_from(source: &ConfigSource) -> anyhow::Result<ValidatorsConfig> {
    match source {
        ConfigSource::Explicit(path) => load_config(path),
        ConfigSource::Default(path) if path.exists() => load_config(path),
        ConfigSource::Default(path) => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(ValidatorsConfig::default())
        }
    }
}
