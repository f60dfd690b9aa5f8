//! Listener records recovered from a snapshot.

use serde::{Deserialize, Serialize};

/// Transport protocol of a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Tcp,
    Udp,
    Other,
}

impl Protocol {
    /// Classify a protocol column token.
    ///
    /// Tokens are matched by substring so that variants such as `TCP6`
    /// still count as TCP.
    pub fn from_token(token: &str) -> Self {
        let token = token.to_uppercase();
        if token.contains("TCP") {
            Protocol::Tcp
        } else if token.contains("UDP") {
            Protocol::Udp
        } else {
            Protocol::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
            Protocol::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single listening socket seen in a snapshot.
///
/// The port is kept as the text that followed the last colon of the address
/// column. Matching against the registry compares this text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerRecord {
    pub protocol: Protocol,
    pub port: String,
    pub pid: Option<String>,
    pub process_name: Option<String>,
}

impl ListenerRecord {
    pub fn new(protocol: Protocol, port: impl Into<String>) -> Self {
        Self {
            protocol,
            port: port.into(),
            pid: None,
            process_name: None,
        }
    }

    pub fn with_pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = Some(pid.into());
        self
    }

    pub fn with_process_name(mut self, name: impl Into<String>) -> Self {
        self.process_name = Some(name.into());
        self
    }

    pub fn is_tcp(&self) -> bool {
        self.protocol == Protocol::Tcp
    }
}

impl std::fmt::Display for ListenerRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} :{} (PID: {}, Process: {})",
            self.protocol,
            self.port,
            self.pid.as_deref().unwrap_or("-"),
            self.process_name.as_deref().unwrap_or("-")
        )
    }
}
