//! Domain layer - Pure data models and reconciliation logic.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod listener;
mod network;
mod registry;
mod report;

// Re-export all domain types
pub use listener::{ListenerRecord, Protocol};
pub use network::NetworkInterfaceInfo;
pub use registry::{default_registry, RegistryEntry};
pub use report::{reconcile, PortStatus, StatusRow};
