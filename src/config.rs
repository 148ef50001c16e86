//! Configuration loading
//!
//! Reads `<config_dir>/pickbox/config.toml` unless a path is given.

mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use types::{AutocompleteConfig, Config, SpinnerConfig};

use crate::error::PickError;

/// Default config file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pickbox").join("config.toml"))
}

/// Parse a config file; a missing file yields the defaults
pub fn load_config_from(path: &Path) -> Result<Config, PickError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(PickError::InvalidConfig {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };

    toml::from_str(&contents).map_err(|e| PickError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config from an explicit path (errors are fatal) or the default
/// location (errors are logged and defaults used)
pub fn load_config(explicit: Option<&Path>) -> Result<Config, PickError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(PickError::InvalidConfig {
                path: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        return load_config_from(path);
    }

    let Some(path) = default_config_path() else {
        return Ok(Config::default());
    };

    match load_config_from(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("{}; using default configuration", e);
            Ok(Config::default())
        }
    }
}
