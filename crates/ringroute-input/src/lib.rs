//! Input side of Ringroute
//!
//! Loads networks from TOML, YAML, or JSON files, runs the interactive
//! prompt session, and resolves settings from file, environment, and `.env`.

pub mod error;
pub mod network_file;
pub mod prompt;
pub mod settings;


pub use error::InputError;
pub use network_file::{NetworkFormat, load_network, parse_network};
pub use prompt::{PromptSession, RouteRequest, split_list};
pub use settings::{OutputFormat, Settings, SETTINGS_FILE};
