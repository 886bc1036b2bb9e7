//! Errors raised while reading user input

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported network file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a non-negative count for \"{prompt}\", got \"{value}\"")]
    InvalidCount { prompt: String, value: String },

    #[error("input ended while waiting for \"{0}\"")]
    UnexpectedEof(String),

    #[error("unknown output format \"{0}\" (expected text or json)")]
    InvalidFormat(String),
}
