//! Process-wide configuration.
//!
//! Everything here is resolved once at startup and then passed, read-only,
//! into the components that need it. The registry lives at
//! `~/.netpeek/ports-list.json` unless `NETPEEK_HOME` points elsewhere.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Name of the per-user data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".netpeek";

/// File name of the port registry inside the data directory.
pub const REGISTRY_FILE_NAME: &str = "ports-list.json";

/// Public IP echo endpoint.
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org?format=json";

/// Overrides the data directory.
pub const ENV_HOME: &str = "NETPEEK_HOME";

/// Overrides the public IP endpoint.
pub const ENV_PUBLIC_IP_URL: &str = "NETPEEK_PUBLIC_IP_URL";

/// Optional timeout for the public IP request, in whole seconds.
pub const ENV_HTTP_TIMEOUT: &str = "NETPEEK_HTTP_TIMEOUT_SECS";

/// Immutable configuration shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    registry_file: PathBuf,
    public_ip_url: String,
    http_timeout: Option<Duration>,
}

impl AppConfig {
    /// Resolve the configuration from the environment and the user's home
    /// directory.
    pub fn from_env() -> Result<Self> {
        let data_dir = match non_blank_var(ENV_HOME) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?
                .join(DATA_DIR_NAME),
        };

        let mut config = Self::with_data_dir(data_dir);

        if let Some(url) = non_blank_var(ENV_PUBLIC_IP_URL) {
            config.public_ip_url = url;
        }
        config.http_timeout = non_blank_var(ENV_HTTP_TIMEOUT).and_then(|v| parse_timeout(&v));

        Ok(config)
    }

    /// Build a configuration rooted at an explicit data directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry_file: data_dir.into().join(REGISTRY_FILE_NAME),
            public_ip_url: DEFAULT_PUBLIC_IP_URL.to_string(),
            http_timeout: None,
        }
    }

    /// Replace the public IP endpoint.
    pub fn with_public_ip_url(mut self, url: impl Into<String>) -> Self {
        self.public_ip_url = url.into();
        self
    }

    pub fn registry_file(&self) -> &Path {
        &self.registry_file
    }

    pub fn public_ip_url(&self) -> &str {
        &self.public_ip_url
    }

    /// Timeout for the public IP request. `None` lets it run to completion.
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_timeout(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}
