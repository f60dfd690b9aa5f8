//! Local network interface model.

use serde::{Deserialize, Serialize};

/// One IPv4 address bound to a non-loopback interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterfaceInfo {
    pub interface_name: String,
    pub ipv4: String,
    pub mac: String,
}

impl NetworkInterfaceInfo {
    /// MAC reported for interfaces without a hardware address.
    pub const NO_MAC: &'static str = "00:00:00:00:00:00";

    pub fn new(
        interface_name: impl Into<String>,
        ipv4: impl Into<String>,
        mac: Option<String>,
    ) -> Self {
        Self {
            interface_name: interface_name.into(),
            ipv4: ipv4.into(),
            mac: mac.unwrap_or_else(|| Self::NO_MAC.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mac_defaults() {
        let info = NetworkInterfaceInfo::new("tun0", "10.8.0.2", None);
        assert_eq!(info.mac, NetworkInterfaceInfo::NO_MAC);
    }
}
