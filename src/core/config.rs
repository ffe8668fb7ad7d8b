//! On-disk configuration.
//!
//! A small TOML file with session defaults. The credential is deliberately
//! not part of it: secrets live only in process memory or the environment.

use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Model id used when no `-m` flag is given (e.g. "gemini-2.0-flash").
    pub default_model: Option<String>,
    /// Sampling temperature used when no `-t` flag is given.
    pub default_temperature: Option<f32>,
    /// Override for the API endpoint base URL.
    pub base_url: Option<String>,
    /// Chat log file enabled at startup, as if passed via `-l`.
    pub log_file: Option<String>,
}

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config at {}: {}", path.display(), source)
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl Config {
    /// Load from the platform config directory; a missing file means defaults.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from_path(config_path: &Path) -> Result<Config, ConfigError> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gemchat").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from_path(Path::new("/nonexistent/gemchat/config.toml"))
            .expect("missing file is fine");
        assert!(config.default_model.is_none());
        assert!(config.default_temperature.is_none());
    }

    #[test]
    fn valid_toml_is_parsed() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "default_model = \"gemini-2.0-flash-lite\"\ndefault_temperature = 0.5"
        )
        .expect("write");

        let config = Config::load_from_path(file.path()).expect("parses");
        assert_eq!(config.default_model.as_deref(), Some("gemini-2.0-flash-lite"));
        assert_eq!(config.default_temperature, Some(0.5));
    }

    #[test]
    fn invalid_toml_reports_the_path() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "default_model = [not toml").expect("write");

        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
