//! File-backed port registry.
//!
//! Stores the user's apps as a JSON array at `~/.netpeek/ports-list.json`:
//! ```json
//! [
//!   { "name": "App1", "port": "3000", "url": "http://localhost:3000" }
//! ]
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::config::AppConfig;
use crate::domain::{default_registry, RegistryEntry};
use crate::error::{Error, Result};
use crate::ports::RegistryRepository;

/// Registry store backed by a JSON file.
pub struct RegistryStore {
    /// Path to the registry file.
    path: PathBuf,
}

impl RegistryStore {
    /// Create a store for the registry file named by the configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_path(config.registry_file().to_path_buf())
    }

    /// Create a store with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_error(&self, reason: impl std::fmt::Display) -> Error {
        Error::ConfigRead {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl RegistryRepository for RegistryStore {
    /// Write the default registry unless a file is already present.
    ///
    /// Creates the parent directory when needed. The file is opened with
    /// `create_new`, so an existing registry is never truncated even if it
    /// appears between the check and the write.
    async fn ensure(&self) -> Result<bool> {
        if fs::try_exists(&self.path).await? {
            return Ok(false);
        }

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await.map_err(|e| {
                Error::Config(format!(
                    "Failed to create data directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(&default_registry())?;

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => {
                return Err(Error::Config(format!(
                    "Failed to create registry file {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        file.write_all(content.as_bytes()).await?;
        file.sync_all().await?;

        debug!(path = %self.path.display(), "wrote default registry");
        Ok(true)
    }

    /// Load all entries from disk.
    ///
    /// A missing, unreadable or malformed file is an error; defaults are
    /// never substituted for a broken registry.
    async fn load(&self) -> Result<Vec<RegistryEntry>> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.read_error(e))?;

        let entries: Vec<RegistryEntry> =
            serde_json::from_str(&content).map_err(|e| self.read_error(e))?;

        debug!(path = %self.path.display(), entries = entries.len(), "loaded registry");
        Ok(entries)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
