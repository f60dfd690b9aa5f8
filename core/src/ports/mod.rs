//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces that the application layer uses
//! to interact with external systems. Implementations live in `adapters`.

mod identity;
mod registry;
mod scanner;

pub use identity::{InterfaceSource, PublicIpSource};
pub use registry::RegistryRepository;
pub use scanner::ListenerSource;
