//! Error types for the netpeek-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for netpeek operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a port status or identity report.
#[derive(Error, Debug)]
pub enum Error {
    /// The port registry file is missing, unreadable or not valid JSON.
    #[error("Could not read registry file {path}: {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    /// The listener enumeration command failed or wrote diagnostics.
    #[error("Listener snapshot failed: {0}")]
    SnapshotCommand(String),

    /// The public IP request failed or returned an unparsable body.
    #[error("Could not fetch public IP: {0}")]
    NetworkFetch(String),

    /// Configuration or bootstrap error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The editor could not be started.
    #[error("Failed to launch editor `{editor}`: {reason}")]
    EditorLaunch { editor: String, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
