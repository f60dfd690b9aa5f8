//! Port registry repository port (interface).

use std::path::Path;

use crate::domain::RegistryEntry;
use crate::error::Result;

/// Port for the user's persisted list of apps.
pub trait RegistryRepository: Send + Sync {
    /// Create the registry with default entries if it does not exist.
    ///
    /// Returns `true` when a new registry was written. An existing registry
    /// is never touched.
    fn ensure(&self) -> impl std::future::Future<Output = Result<bool>> + Send;

    /// Read all entries in declaration order.
    fn load(&self) -> impl std::future::Future<Output = Result<Vec<RegistryEntry>>> + Send;

    /// Location of the registry, for external editing.
    fn location(&self) -> &Path;
}
