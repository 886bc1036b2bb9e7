//! Network declaration files

use crate::error::InputError;
use ringroute_core::Network;
use std::path::Path;

/// Supported network file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkFormat {
    Toml,
    Yaml,
    Json,
}

impl NetworkFormat {
    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(NetworkFormat::Toml),
            "yml" | "yaml" => Some(NetworkFormat::Yaml),
            "json" => Some(NetworkFormat::Json),
            _ => None,
        }
    }
}

/// Parse a network declaration. Labels come back trimmed.
pub fn parse_network(text: &str, format: NetworkFormat) -> Result<Network, InputError> {
    let network: Network = match format {
        NetworkFormat::Toml => toml::from_str(text)?,
        NetworkFormat::Yaml => serde_yaml::from_str(text)?,
        NetworkFormat::Json => serde_json::from_str(text)?,
    };
    Ok(network.normalized())
}

/// Load a network file, picking the parser from its extension.
pub fn load_network(path: &Path) -> Result<Network, InputError> {
    let format = NetworkFormat::from_path(path)
        .ok_or_else(|| InputError::UnsupportedFormat(path.to_path_buf()))?;

    let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let network = parse_network(&text, format)?;
    tracing::info!(
        "Loaded {} circles, {} intersections from {}",
        network.circles.len(),
        network.intersections.len(),
        path.display()
    );
    Ok(network)
}
