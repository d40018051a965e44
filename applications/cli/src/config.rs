/// CLI configuration
use crate::error::{CliError, Result};
use hoax_core::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "hoax.toml";

/// Settings for the `hoax` binary.
///
/// Keys are flat so that each one maps to a single `HOAX_` variable,
/// e.g. `api_base_url` is read from `HOAX_API_BASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,

    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,

    #[serde(default = "default_users_page_size")]
    pub users_page_size: u32,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// `path` must exist when given; otherwise `hoax.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, config::Environment::with_prefix("HOAX"))
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path.to_path_buf())),
            None => settings
                .add_source(config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false)),
        };

        // Override with environment variables (prefixed with HOAX_)
        settings = settings.add_source(env.try_parsing(true));

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.users_page_size == 0 {
            return Err(CliError::Config(
                "Page size must be at least 1 (HOAX_USERS_PAGE_SIZE)".to_string(),
            ));
        }

        match self.api_base_url.split_once("://") {
            Some(("http" | "https", host)) if !host.is_empty() => Ok(()),
            _ => Err(CliError::Config(format!(
                "API base URL must be http or https: {}",
                self.api_base_url
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_secs)
    }
}

// Default values
fn default_api_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_timeout_secs() -> u64 {
    30
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("./.hoax")
}

fn default_users_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_timeout_secs: default_api_timeout_secs(),
            storage_dir: default_storage_dir(),
            users_page_size: default_users_page_size(),
        }
    }
}
