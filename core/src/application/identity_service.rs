//! Network identity application service.

use tracing::warn;

use crate::domain::NetworkInterfaceInfo;
use crate::error::Result;
use crate::ports::{InterfaceSource, PublicIpSource};

/// Application service for the `ip` report.
///
/// The local and public halves are independent: callers read the local
/// interfaces first and a failing public lookup never takes them away.
pub struct IdentityService<I: InterfaceSource, P: PublicIpSource> {
    interfaces: I,
    public: P,
}

impl<I: InterfaceSource, P: PublicIpSource> IdentityService<I, P> {
    pub fn new(interfaces: I, public: P) -> Self {
        Self { interfaces, public }
    }

    /// Non-loopback IPv4 interfaces of this host.
    pub fn local_interfaces(&self) -> Vec<NetworkInterfaceInfo> {
        self.interfaces.interfaces()
    }

    /// Address this host is seen with from the internet.
    pub async fn public_ip(&self) -> Result<String> {
        self.public.public_ip().await.inspect_err(|e| {
            warn!(error = %e, "public IP lookup failed");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct MockInterfaces(Vec<NetworkInterfaceInfo>);

    impl InterfaceSource for MockInterfaces {
        fn interfaces(&self) -> Vec<NetworkInterfaceInfo> {
            self.0.clone()
        }
    }

    struct MockPublic(Option<&'static str>);

    impl PublicIpSource for MockPublic {
        async fn public_ip(&self) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| Error::NetworkFetch("getaddrinfo ENOTFOUND".to_string()))
        }
    }

    fn eth0() -> NetworkInterfaceInfo {
        NetworkInterfaceInfo::new("eth0", "192.168.1.20", Some("aa:bb:cc:dd:ee:ff".to_string()))
    }

    #[tokio::test]
    async fn test_identity_success() {
        let service = IdentityService::new(MockInterfaces(vec![eth0()]), MockPublic(Some("203.0.113.7")));

        assert_eq!(service.local_interfaces(), vec![eth0()]);
        assert_eq!(service.public_ip().await.unwrap(), "203.0.113.7");
    }

    #[tokio::test]
    async fn test_public_failure_keeps_local_results() {
        let service = IdentityService::new(MockInterfaces(vec![eth0()]), MockPublic(None));

        let local = service.local_interfaces();
        let public = service.public_ip().await;

        assert!(matches!(public, Err(Error::NetworkFetch(_))));
        assert_eq!(local.len(), 1);
        assert_eq!(local[0].interface_name, "eth0");
    }
}
