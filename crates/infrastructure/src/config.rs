//! Client configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. a TOML file (`--config`, else `gradely.toml` in the working
//!    directory when present)
//! 3. `GRADELY_*` environment variables

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gradely.toml";

/// Prefix of the configuration environment variables.
pub const ENV_PREFIX: &str = "GRADELY";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// A source could not be read or merged.
    #[error("could not load configuration: {0}")]
    Source(#[from] ::config::ConfigError),

    /// The API URL is not a valid absolute URL.
    #[error("invalid api_url {url:?}: {reason}")]
    InvalidApiUrl {
        /// Configured value
        url: String,
        /// Parser message
        reason: String,
    },

    /// No credential path was configured and no data directory exists.
    #[error("could not determine a location for the credential file")]
    NoDataDir,
}

/// Settings of the API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are resolved against
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout in seconds; unset means no client-side limit
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Credential file; defaults to the platform data directory
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("gradely/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: None,
            credentials_path: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from defaults, an optional file and the
    /// environment.
    ///
    /// An explicit `path` must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or the result is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        let mut builder = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("user_agent", default_user_agent())?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).format(FileFormat::Toml)),
            None => builder.add_source(
                File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
            ),
        };

        let loaded: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks that the API URL is an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::InvalidApiUrl`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        url::Url::parse(&self.api_url)
            .map(|_| ())
            .map_err(|e| ConfigLoadError::InvalidApiUrl {
                url: self.api_url.clone(),
                reason: e.to_string(),
            })
    }

    /// Per-request timeout, if configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Location of the credential file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::NoDataDir`] when neither a path is
    /// configured nor a platform data directory is known.
    pub fn credentials_path(&self) -> Result<PathBuf, ConfigLoadError> {
        self.credentials_path
            .clone()
            .or_else(crate::persistence::FileCredentialStore::default_path)
            .ok_or(ConfigLoadError::NoDataDir)
    }
}
