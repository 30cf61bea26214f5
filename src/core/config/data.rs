use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::url::normalize_base_url;

/// Server address used when neither the command line, the environment nor
/// the config file names one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Environment variable consulted before the config file.
pub const SERVER_URL_ENV: &str = "PDFCHAT_SERVER_URL";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the document Q&A server (e.g. "http://localhost:8000")
    pub server_url: Option<String>,
    /// File that receives tracing output while the TUI owns the terminal
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Pick the server URL: an explicit override (flag or environment) wins,
    /// then the config file, then [`DEFAULT_SERVER_URL`].
    pub fn resolve_server_url(&self, override_url: Option<&str>) -> String {
        override_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.server_url
                    .as_deref()
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
            })
            .map(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    pub fn resolve_log_file(&self, override_path: Option<&Path>) -> Option<PathBuf> {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.log_file.clone())
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
