//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with external systems.

pub mod editor;
pub mod network;
pub mod registry;
pub mod scanner;

// Re-export main types for convenience
pub use editor::EditorLauncher;
pub use network::{PublicIpClient, SystemInterfaces};
pub use registry::RegistryStore;
pub use scanner::{ListenerGrammar, ListenerScanner};
