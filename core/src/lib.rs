//! netpeek Core Library
//!
//! Local network identity and port status checks for developers running
//! several local services. Provides functionality to:
//! - Snapshot listening sockets using the host's enumeration tool
//! - Parse that tool's text output into listener records
//! - Reconcile a user-declared port registry against the snapshot
//! - Report local interfaces and the public IP address
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data models and reconciliation
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! - Linux / macOS: Uses `lsof -i -P -n`
//! - Windows: Uses `netstat -ano`

// Hexagonal architecture layers
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub mod config;
pub mod error;

// Re-export domain types (primary API)
pub use domain::{
    reconcile, ListenerRecord, NetworkInterfaceInfo, PortStatus, Protocol, RegistryEntry,
    StatusRow,
};

// Re-export other commonly used types
pub use adapters::{
    EditorLauncher, ListenerGrammar, ListenerScanner, PublicIpClient, RegistryStore,
    SystemInterfaces,
};
pub use application::{IdentityService, StatusService};
pub use config::AppConfig;
pub use error::{Error, Result};
