//! Settings resolution
//!
//! Precedence, lowest first: built-in defaults, `ringroute.toml` in the
//! working directory, environment (`.env` included), then CLI flags, which
//! the binary applies on top.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "ringroute.toml";

pub const ENV_NETWORK: &str = "RINGROUTE_NETWORK";
pub const ENV_FORMAT: &str = "RINGROUTE_FORMAT";
pub const ENV_LOG: &str = "RINGROUTE_LOG";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(InputError::InvalidFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Network file used when no `--network` flag is given.
    pub network: Option<PathBuf>,
    pub format: OutputFormat,
    /// Log level for the `ringroute` target.
    pub log_level: String,
    /// The `.env` file that was read, if any.
    #[serde(skip)]
    pub env_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            network: None,
            format: OutputFormat::Text,
            log_level: "info".to_string(),
            env_file: None,
        }
    }
}

impl Settings {
    /// Resolve settings for a working directory from its settings file,
    /// its `.env`, and the process environment.
    pub fn load(dir: &Path) -> Result<Self, InputError> {
        // Missing .env is fine; existing variables win over it.
        let env_path = dir.join(".env");
        let env_file = dotenvy::from_path(&env_path).ok().map(|_| env_path);

        let path = dir.join(SETTINGS_FILE);
        let file = if path.exists() {
            Some(std::fs::read_to_string(&path).map_err(|source| InputError::Read {
                path: path.clone(),
                source,
            })?)
        } else {
            None
        };

        let mut settings = Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())?;
        settings.env_file = env_file;
        Ok(settings)
    }

    /// Merge an optional settings-file body with an environment lookup.
    pub fn from_sources<F>(file: Option<&str>, env: F) -> Result<Self, InputError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match file {
            Some(text) => toml::from_str(text)?,
            None => Settings::default(),
        };

        if let Some(network) = env(ENV_NETWORK).filter(|v| !v.trim().is_empty()) {
            settings.network = Some(PathBuf::from(network.trim()));
        }
        if let Some(format) = env(ENV_FORMAT).filter(|v| !v.trim().is_empty()) {
            settings.format = format.parse()?;
        }
        if let Some(level) = env(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            settings.log_level = level.trim().to_string();
        }

        Ok(settings)
    }
}
