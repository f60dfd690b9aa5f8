//! Ip command - local interfaces and public address.

use anyhow::Result;
use netpeek_core::{
    AppConfig, IdentityService, NetworkInterfaceInfo, PublicIpClient, SystemInterfaces,
};

pub async fn run(config: &AppConfig) -> Result<()> {
    let service = IdentityService::new(SystemInterfaces::new(), PublicIpClient::new(config));

    // Printed before the lookup; a failed lookup leaves them in place.
    print!("{}", render_local(&service.local_interfaces()));

    match service.public_ip().await {
        Ok(ip) => print!("{}", render_public(&ip)),
        Err(e) => eprintln!("\n{}", e),
    }

    Ok(())
}

fn render_local(interfaces: &[NetworkInterfaceInfo]) -> String {
    if interfaces.is_empty() {
        return "No local network info found.\n".to_string();
    }

    let mut out = String::from("Local Network Info:\n");
    for net in interfaces {
        out.push_str(&format!(" - Interface: {}\n", net.interface_name));
        out.push_str(&format!("   IP:  {}\n", net.ipv4));
        out.push_str(&format!("   MAC: {}\n\n", net.mac));
    }
    out
}

fn render_public(ip: &str) -> String {
    format!("Public IP address:\n - {}\n", ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_local() {
        let interfaces = vec![
            NetworkInterfaceInfo::new("eth0", "192.168.1.20", Some("aa:bb:cc:dd:ee:ff".to_string())),
            NetworkInterfaceInfo::new("wg0", "10.8.0.2", None),
        ];

        let out = render_local(&interfaces);
        assert_eq!(
            out,
            "Local Network Info:\n \
             - Interface: eth0\n   IP:  192.168.1.20\n   MAC: aa:bb:cc:dd:ee:ff\n\n \
             - Interface: wg0\n   IP:  10.8.0.2\n   MAC: 00:00:00:00:00:00\n\n"
        );
    }

    #[test]
    fn test_render_local_empty() {
        assert_eq!(render_local(&[]), "No local network info found.\n");
    }

    #[test]
    fn test_render_public() {
        assert_eq!(render_public("203.0.113.7"), "Public IP address:\n - 203.0.113.7\n");
    }
}
