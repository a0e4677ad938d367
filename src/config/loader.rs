use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::WordStatError;

const CONFIG_DIR: &str = "wordstat";
const CONFIG_FILE: &str = "config.toml";

/// Default config location, `~/.config/wordstat/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicitly requested file must exist and parse. The default file is
/// optional: when it is missing the defaults are used, and when it is
/// malformed a warning is logged and the defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, WordStatError> {
    if let Some(path) = explicit {
        let contents = fs::read_to_string(path).map_err(|e| {
            WordStatError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        return parse_config(&contents);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    Ok(load_default_from_path(&path))
}

/// Read the optional default config file at `path`
pub fn load_default_from_path(path: &Path) -> Config {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, WordStatError> {
    toml::from_str::<Config>(content).map_err(|e| WordStatError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
