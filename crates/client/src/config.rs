//! Credential and endpoint resolution.
//!
//! The access token comes from the `--token` flag (or `CISCO_SPARK_TOKEN`),
//! then from the `token` key of a YAML config file. The config file is the
//! one passed with `--config`, or `$HOME/.sparkctl.yaml` when it exists.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the access token.
pub const TOKEN_ENV: &str = "CISCO_SPARK_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "SPARK_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.ciscospark.com/v1";

/// File name looked up in the home directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".sparkctl.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("No access token found: set CISCO_SPARK_TOKEN or add a `token` key to the config file")]
    MissingToken,
}

/// Contents of the YAML config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    pub token: Option<String>,
    pub base_url: Option<String>,
}

impl ConfigFile {
    /// Reads and parses the file at `path`. An empty file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// `$HOME/.sparkctl.yaml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Where the access token was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token` flag or the token environment variable.
    Flag,
    ConfigFile(PathBuf),
}

/// Fully resolved connection settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: String,
    pub token_source: TokenSource,
    pub base_url: String,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Settings {
    /// Resolves the token and base URL from flags and the config file.
    ///
    /// An explicit `config_path` must be readable and valid. The default path
    /// is only consulted when it exists, and is skipped with a warning when it
    /// cannot be loaded.
    pub fn resolve(
        token: Option<&str>,
        base_url: Option<&str>,
        config_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with_default(token, base_url, config_path, default_config_path())
    }

    fn resolve_with_default(
        token: Option<&str>,
        base_url: Option<&str>,
        config_path: Option<&Path>,
        default_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let (file, file_path) = match config_path {
            Some(path) => (ConfigFile::load(path)?, Some(path.to_path_buf())),
            None => match default_path.filter(|path| path.is_file()) {
                Some(path) => match ConfigFile::load(&path) {
                    Ok(file) => (file, Some(path)),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring default config file");
                        (ConfigFile::default(), None)
                    }
                },
                None => (ConfigFile::default(), None),
            },
        };

        let (token, token_source) = if let Some(token) = present(token) {
            (token.to_string(), TokenSource::Flag)
        } else if let (Some(token), Some(path)) = (present(file.token.as_deref()), file_path) {
            (token.to_string(), TokenSource::ConfigFile(path))
        } else {
            return Err(ConfigError::MissingToken);
        };

        let base_url = present(base_url)
            .or(present(file.base_url.as_deref()))
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();

        Ok(Self {
            token,
            token_source,
            base_url,
        })
    }
}
