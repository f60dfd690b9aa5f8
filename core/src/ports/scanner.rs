//! Listener source port (interface).

use crate::domain::ListenerRecord;
use crate::error::Result;

/// Port for enumerating the listeners currently open on this host.
///
/// Implementations handle platform-specific details (netstat, lsof, etc.)
pub trait ListenerSource: Send + Sync {
    /// Take a snapshot of all listeners.
    ///
    /// Fails as a whole when the underlying enumeration fails; records are
    /// never returned from a failed invocation.
    fn snapshot(&self) -> impl std::future::Future<Output = Result<Vec<ListenerRecord>>> + Send;
}
