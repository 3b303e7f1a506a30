//! Application configuration.

use crate::consts::cli_consts::{API_URL_ENV_VAR, CONFIG_DIR, CONFIG_FILE};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Saved API base URL; production is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Create Config with the given API URL.
    pub fn new(api_url: Option<String>) -> Self {
        Config { api_url }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Path of the config file, `~/.namaste/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Failed to get home directory",
    ))?;
    Ok(home_path.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Resolves the API environment.
///
/// Precedence: command-line flag, `NAMASTE_API_URL`, saved config, production.
pub fn resolve_environment(
    cli_url: Option<&str>,
    env_url: Option<&str>,
    config: Option<&Config>,
) -> Result<Environment, String> {
    let candidate = cli_url
        .or(env_url)
        .or_else(|| config.and_then(|c| c.api_url.as_deref()))
        .map(str::trim)
        .filter(|url| !url.is_empty());

    match candidate {
        Some(url) => url.parse::<Environment>(),
        None => Ok(Environment::Production),
    }
}

/// Reads `NAMASTE_API_URL` from the process environment.
pub fn api_url_from_env() -> Option<String> {
    std::env::var(API_URL_ENV_VAR).ok()
}
