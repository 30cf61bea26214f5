use crate::core::config::data::{path_display, Config};
use directories::ProjectDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Errors raised while reading or writing `config.toml`.
#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Write { path: PathBuf, source: io::Error },
    Encode(toml::ser::Error),
    /// The platform has no configuration directory (e.g. no home directory).
    NoConfigDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {source}", path_display(path))
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config at {}: {source}", path_display(path))
            }
            ConfigError::Write { path, source } => {
                write!(f, "Failed to write config at {}: {source}", path_display(path))
            }
            ConfigError::Encode(source) => write!(f, "Failed to encode config: {source}"),
            ConfigError::NoConfigDir => write!(f, "Failed to determine config directory"),
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } | ConfigError::Write { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Encode(source) => Some(source),
            ConfigError::NoConfigDir => None,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "pdfchat", "pdfchat")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load the user's config. Without a config directory there is nothing
    /// to read, so the defaults apply.
    pub fn load() -> Result<Config, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No config directory; using default settings");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persist to the user's config file. Fails when there is nowhere to write.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to_path(&path)
    }

    /// Atomically replace `path` via a temp file in the same directory.
    pub(crate) fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Encode)?;
        let write_err = |source: io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty());
        let mut temp_file = match dir {
            Some(dir) => {
                fs::create_dir_all(dir).map_err(write_err)?;
                NamedTempFile::new_in(dir).map_err(write_err)?
            }
            None => NamedTempFile::new_in(".").map_err(write_err)?,
        };
        temp_file.write_all(contents.as_bytes()).map_err(write_err)?;
        temp_file.as_file_mut().sync_all().map_err(write_err)?;
        temp_file
            .persist(path)
            .map_err(|err| write_err(err.error))?;
        debug!(path = %path_display(path), "Saved config");
        Ok(())
    }
}
