//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use stevedore_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "stevedore";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "STEVEDORE_API_URL";

/// Load settings, merging file, environment, and CLI in that order.
///
/// Missing or unparsable files fall back to defaults with a warning; a bad
/// config never prevents the console from starting.
pub fn load_settings(explicit_path: Option<&Path>, cli_api_url: Option<&str>) -> Settings {
    let mut settings = match explicit_path {
        Some(path) => read_settings(path),
        None => default_config_path()
            .map(|path| read_settings(&path))
            .unwrap_or_default(),
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.is_empty() {
            settings.api.base_url = url;
        }
    }

    if let Some(url) = cli_api_url {
        settings.api.base_url = url.to_string();
    }

    settings
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

fn read_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
