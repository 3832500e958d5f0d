//! Configuration module
//!
//! Loads `~/.config/party-planner/config.toml`. Every section and key is
//! optional; a missing file means defaults.

mod loader;
pub mod types;

pub use loader::{ConfigResult, apply_env_overrides, config_path, load_config, load_config_from_path, load_config_strict};
pub use types::{AiConfig, AiProviderType, ClipboardBackend, ClipboardConfig, Config};
