//! `netstat -ano` grammar (Windows).
//!
//! ```text
//!   Proto  Local Address          Foreign Address        State           PID
//!   TCP    0.0.0.0:135            0.0.0.0:0              LISTENING       1052
//!   TCP    [::]:3000              [::]:0                 LISTENING       8812
//!   UDP    0.0.0.0:5353           *:*                                    2260
//! ```

use crate::domain::{ListenerRecord, Protocol};

use super::utils::Utils;

/// Protocol, local address, foreign address and PID.
const MIN_FIELDS: usize = 4;

pub(super) fn parse(output: &str) -> Vec<ListenerRecord> {
    let mut records = Vec::new();

    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }

        let protocol = match fields[0] {
            "TCP" => Protocol::Tcp,
            "UDP" => Protocol::Udp,
            _ => continue,
        };

        let Some(port) = Utils::port_suffix(fields[1]) else {
            continue;
        };

        let pid = fields[fields.len() - 1];

        records.push(ListenerRecord::new(protocol, port).with_pid(pid));
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_row() {
        let records = parse("TCP 127.0.0.1:3000 ... 1234");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].protocol, Protocol::Tcp);
        assert_eq!(records[0].port, "3000");
        assert_eq!(records[0].pid.as_deref(), Some("1234"));
        assert_eq!(records[0].process_name, None);
    }

    #[test]
    fn test_parse_netstat_output() {
        let output = r#"
Active Connections

  Proto  Local Address          Foreign Address        State           PID
  TCP    0.0.0.0:135            0.0.0.0:0              LISTENING       1052
  TCP    [::]:3000              [::]:0                 LISTENING       8812
  UDP    0.0.0.0:5353           *:*                                    2260
"#;

        let records = parse(output);
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].port, "135");
        assert_eq!(records[0].pid.as_deref(), Some("1052"));

        assert_eq!(records[1].protocol, Protocol::Tcp);
        assert_eq!(records[1].port, "3000");
        assert_eq!(records[1].pid.as_deref(), Some("8812"));

        assert_eq!(records[2].protocol, Protocol::Udp);
        assert_eq!(records[2].port, "5353");
        assert_eq!(records[2].pid.as_deref(), Some("2260"));
    }

    #[test]
    fn test_skips_short_and_foreign_lines() {
        let output = "TCP 127.0.0.1:3000\nTCPv6 [::]:80 [::]:0 LISTENING 4\ntcp 0.0.0.0:22 0.0.0.0:0 LISTENING 9\n";
        assert!(parse(output).is_empty());
    }

    #[test]
    fn test_keeps_parse_order() {
        let output = "TCP 0.0.0.0:8080 0.0.0.0:0 LISTENING 2\nTCP [::]:8080 [::]:0 LISTENING 3\n";
        let pids: Vec<_> = parse(output).into_iter().filter_map(|r| r.pid).collect();
        assert_eq!(pids, vec!["2", "3"]);
    }
}
