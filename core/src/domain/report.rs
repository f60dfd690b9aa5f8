//! Status report derived from the registry and a listener snapshot.

use serde::{Deserialize, Serialize};

use super::{ListenerRecord, RegistryEntry};

/// Placeholder used for a missing PID or URL.
const NONE_MARKER: &str = "-";

/// Whether a registry entry has a TCP listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortStatus {
    Active,
    Inactive,
}

impl PortStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortStatus::Active => "Active",
            PortStatus::Inactive => "Inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PortStatus::Active)
    }
}

impl std::fmt::Display for PortStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the port status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRow {
    /// 1-based position of the entry in the registry.
    pub sequence: usize,
    pub name: String,
    /// `None` when the declared port is not a number.
    pub port: Option<u16>,
    pub status: PortStatus,
    pub pid: String,
    pub url: String,
}

/// Match every registry entry against the TCP listeners of a snapshot.
///
/// Produces exactly one row per entry, in registry order. Ports are compared
/// as text, so `"08080"` does not match a listener on `8080`. When several
/// listeners share a port the first one in snapshot order wins.
pub fn reconcile(entries: &[RegistryEntry], listeners: &[ListenerRecord]) -> Vec<StatusRow> {
    let tcp: Vec<&ListenerRecord> = listeners.iter().filter(|l| l.is_tcp()).collect();

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let found = tcp.iter().find(|l| l.port == entry.port);

            StatusRow {
                sequence: index + 1,
                name: entry.name.clone(),
                port: entry.port_number(),
                status: if found.is_some() {
                    PortStatus::Active
                } else {
                    PortStatus::Inactive
                },
                pid: found
                    .and_then(|l| l.pid.clone())
                    .unwrap_or_else(|| NONE_MARKER.to_string()),
                url: if entry.url.is_empty() {
                    NONE_MARKER.to_string()
                } else {
                    entry.url.clone()
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Protocol;

    fn tcp(port: &str, pid: &str) -> ListenerRecord {
        ListenerRecord::new(Protocol::Tcp, port).with_pid(pid)
    }

    #[test]
    fn test_end_to_end_active() {
        let entries = vec![RegistryEntry::new("X", "3000", "http://x")];
        let listeners = vec![tcp("3000", "99")];

        let rows = reconcile(&entries, &listeners);
        assert_eq!(
            rows,
            vec![StatusRow {
                sequence: 1,
                name: "X".to_string(),
                port: Some(3000),
                status: PortStatus::Active,
                pid: "99".to_string(),
                url: "http://x".to_string(),
            }]
        );
    }

    #[test]
    fn test_one_row_per_entry_in_order() {
        let entries = vec![
            RegistryEntry::new("c", "5000", ""),
            RegistryEntry::new("a", "3000", ""),
            RegistryEntry::new("b", "not-a-port", ""),
            RegistryEntry::new("a-again", "3000", ""),
        ];
        let listeners = vec![tcp("3000", "1")];

        let rows = reconcile(&entries, &listeners);
        assert_eq!(rows.len(), 4);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b", "a-again"]);
        let seq: Vec<usize> = rows.iter().map(|r| r.sequence).collect();
        assert_eq!(seq, vec![1, 2, 3, 4]);

        assert_eq!(rows[2].port, None);
        assert_eq!(rows[2].status, PortStatus::Inactive);
        assert!(rows[3].status.is_active());
    }

    #[test]
    fn test_udp_never_matches() {
        let entries = vec![RegistryEntry::new("dns", "53", "")];
        let listeners = vec![
            ListenerRecord::new(Protocol::Udp, "53").with_pid("7"),
            ListenerRecord::new(Protocol::Other, "53").with_pid("8"),
        ];

        let rows = reconcile(&entries, &listeners);
        assert_eq!(rows[0].status, PortStatus::Inactive);
        assert_eq!(rows[0].pid, "-");
    }

    #[test]
    fn test_string_comparison_quirk() {
        let entries = vec![RegistryEntry::new("padded", "08080", "")];
        let listeners = vec![tcp("8080", "42")];

        let rows = reconcile(&entries, &listeners);
        assert_eq!(rows[0].status, PortStatus::Inactive);
        // The numeric column still shows the parsed value.
        assert_eq!(rows[0].port, Some(8080));
    }

    #[test]
    fn test_first_match_wins() {
        let entries = vec![RegistryEntry::new("dual", "3000", "")];
        let listeners = vec![
            ListenerRecord::new(Protocol::Udp, "3000").with_pid("1"),
            tcp("3000", "2"),
            tcp("3000", "3"),
        ];

        let rows = reconcile(&entries, &listeners);
        assert_eq!(rows[0].pid, "2");
    }

    #[test]
    fn test_missing_pid_and_url_markers() {
        let entries = vec![RegistryEntry::new("svc", "9000", "")];
        let listeners = vec![ListenerRecord::new(Protocol::Tcp, "9000")];

        let rows = reconcile(&entries, &listeners);
        assert_eq!(rows[0].status, PortStatus::Active);
        assert_eq!(rows[0].pid, "-");
        assert_eq!(rows[0].url, "-");
    }

    #[test]
    fn test_empty_registry() {
        let rows = reconcile(&[], &[tcp("3000", "1")]);
        assert!(rows.is_empty());
    }
}
