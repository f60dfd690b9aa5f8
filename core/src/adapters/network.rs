//! Network identity adapters: OS interface table and a public IP echo
//! service.

use std::net::IpAddr;
use std::time::Duration;

use pnet::datalink;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::domain::NetworkInterfaceInfo;
use crate::error::{Error, Result};
use crate::ports::{InterfaceSource, PublicIpSource};

/// Reads interfaces from the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl SystemInterfaces {
    pub fn new() -> Self {
        Self
    }
}

impl InterfaceSource for SystemInterfaces {
    fn interfaces(&self) -> Vec<NetworkInterfaceInfo> {
        let mut infos = Vec::new();

        for iface in datalink::interfaces() {
            if iface.is_loopback() {
                continue;
            }

            let mac = iface.mac.map(|m| m.to_string());

            for network in &iface.ips {
                let IpAddr::V4(ip) = network.ip() else {
                    continue;
                };
                if ip.is_loopback() {
                    continue;
                }
                infos.push(NetworkInterfaceInfo::new(
                    iface.name.clone(),
                    ip.to_string(),
                    mac.clone(),
                ));
            }
        }

        debug!(count = infos.len(), "enumerated local interfaces");
        infos
    }
}

#[derive(Debug, Deserialize)]
struct EchoResponse {
    ip: String,
}

/// Extract the address from an ipify-style `{"ip": "..."}` body.
pub fn parse_echo_body(body: &str) -> Result<String> {
    serde_json::from_str::<EchoResponse>(body)
        .map(|r| r.ip)
        .map_err(|e| Error::NetworkFetch(format!("Error parsing response: {}", e)))
}

/// Asks a public echo endpoint which address our requests come from.
///
/// The HTTP client is built per lookup, so a client that cannot be set up
/// surfaces as a failed lookup rather than a failed command.
pub struct PublicIpClient {
    url: String,
    timeout: Option<Duration>,
}

impl PublicIpClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            url: config.public_ip_url().to_string(),
            timeout: config.http_timeout(),
        }
    }

    fn http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| Error::NetworkFetch(format!("Failed to build HTTP client: {}", e)))
    }
}

impl PublicIpSource for PublicIpClient {
    async fn public_ip(&self) -> Result<String> {
        debug!(url = %self.url, "fetching public IP");

        let client = self.http_client()?;
        let response = client.get(&self.url).send().await.map_err(|e| {
            warn!(error = %e, "public IP request failed");
            Error::NetworkFetch(e.to_string())
        })?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::NetworkFetch(format!("Failed to read response: {}", e)))?;

        parse_echo_body(&body)
    }
}
