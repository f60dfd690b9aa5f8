//! Network identity ports (interfaces).

use crate::domain::NetworkInterfaceInfo;
use crate::error::Result;

/// Port for local interface enumeration.
pub trait InterfaceSource: Send + Sync {
    /// List every non-loopback IPv4 address with its interface and MAC.
    fn interfaces(&self) -> Vec<NetworkInterfaceInfo>;
}

/// Port for discovering the address the host is seen with from outside.
pub trait PublicIpSource: Send + Sync {
    fn public_ip(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}
