//! Port status application service.

use tracing::warn;

use crate::domain::{reconcile, StatusRow};
use crate::error::Result;
use crate::ports::{ListenerSource, RegistryRepository};

/// Application service for the port status report.
///
/// Reads the registry, takes a listener snapshot and reconciles the two.
/// Both collaborators are injected through the port traits.
pub struct StatusService<R: RegistryRepository, S: ListenerSource> {
    registry: R,
    source: S,
}

impl<R: RegistryRepository, S: ListenerSource> StatusService<R, S> {
    /// Create a new status service.
    pub fn new(registry: R, source: S) -> Self {
        Self { registry, source }
    }

    /// Build the report: registry read, then snapshot, then reconcile.
    ///
    /// Any failure aborts the report; no partial rows are produced.
    pub async fn report(&self) -> Result<Vec<StatusRow>> {
        let entries = self.registry.load().await.inspect_err(|e| {
            warn!(error = %e, "registry read failed");
        })?;

        let listeners = self.source.snapshot().await.inspect_err(|e| {
            warn!(error = %e, "listener snapshot failed");
        })?;

        Ok(reconcile(&entries, &listeners))
    }
}
