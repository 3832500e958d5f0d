//! Config file discovery and loading

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::ai::provider::normalize_ollama_host;
use crate::error::PlannerError;

const CONFIG_DIR: &str = "party-planner";
const CONFIG_FILE: &str = "config.toml";

/// A loaded config plus a warning to surface when the file was unusable
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    load_config_from_path(&path)
}

/// Load a config file leniently
///
/// A missing file yields defaults silently. An unreadable or malformed file
/// yields defaults and a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult::default(),
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} (using defaults)", e)),
            }
        }
    }
}

/// Load an explicitly requested config file; every problem is an error
pub fn load_config_strict(path: &Path) -> Result<Config, PlannerError> {
    match read_config(path)? {
        Some(config) => Ok(config),
        None => Err(PlannerError::Config {
            path: path.display().to_string(),
            message: "file not found".to_string(),
        }),
    }
}

/// Apply environment overrides; currently only `OLLAMA_HOST`
pub fn apply_env_overrides(config: &mut Config, ollama_host: Option<String>) {
    if let Some(host) = ollama_host.filter(|h| !h.trim().is_empty()) {
        config.ai.host = normalize_ollama_host(&host);
    }
}

fn read_config(path: &Path) -> Result<Option<Config>, PlannerError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(PlannerError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            });
        }
    };

    toml::from_str::<Config>(&contents)
        .map(Some)
        .map_err(|e| PlannerError::Config {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
