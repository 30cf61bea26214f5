//! `set` / `unset` handlers for the config file.

use std::fmt;
use std::path::PathBuf;

use crate::core::config::data::path_display;
use crate::core::config::Config;
use crate::utils::url::validate_server_url;

pub const SERVER_URL_KEY: &str = "server-url";
pub const LOG_FILE_KEY: &str = "log-file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    UnknownKey(String),
    InvalidValue { key: &'static str, message: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::UnknownKey(key) => write!(
                f,
                "Unknown config key: {key} (expected {SERVER_URL_KEY} or {LOG_FILE_KEY})"
            ),
            SettingsError::InvalidValue { key, message } => {
                write!(f, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// Apply `key = value` to `config` and describe the change.
pub fn set_value(config: &mut Config, key: &str, value: &str) -> Result<String, SettingsError> {
    match key {
        SERVER_URL_KEY => {
            let url = validate_server_url(value).map_err(|message| SettingsError::InvalidValue {
                key: SERVER_URL_KEY,
                message,
            })?;
            config.server_url = Some(url.clone());
            Ok(format!("Set {SERVER_URL_KEY} to: {url}"))
        }
        LOG_FILE_KEY => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(SettingsError::InvalidValue {
                    key: LOG_FILE_KEY,
                    message: "path must not be empty".to_string(),
                });
            }
            let path = PathBuf::from(trimmed);
            let message = format!("Set {LOG_FILE_KEY} to: {}", path_display(&path));
            config.log_file = Some(path);
            Ok(message)
        }
        other => Err(SettingsError::UnknownKey(other.to_string())),
    }
}

pub fn unset_value(config: &mut Config, key: &str) -> Result<String, SettingsError> {
    match key {
        SERVER_URL_KEY => config.server_url = None,
        LOG_FILE_KEY => config.log_file = None,
        other => return Err(SettingsError::UnknownKey(other.to_string())),
    }
    Ok(format!("Unset {key}"))
}
