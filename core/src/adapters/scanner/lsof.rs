//! `lsof -i -P -n` grammar (Linux, macOS).
//!
//! Only rows containing `LISTEN` reach this parser:
//! ```text
//! COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
//! node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
//! ```

use crate::domain::{ListenerRecord, Protocol};

use super::utils::Utils;

/// COMMAND through NAME.
const MIN_FIELDS: usize = 9;

const COMMAND: usize = 0;
const PID: usize = 1;
const NODE: usize = 7;
const NAME: usize = 8;

/// Keep only the rows of an lsof dump that describe listening sockets.
pub(super) fn listening_rows(output: &str) -> String {
    output
        .lines()
        .filter(|line| line.contains("LISTEN"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(super) fn parse(output: &str) -> Vec<ListenerRecord> {
    let mut records = Vec::new();

    for line in output.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }

        let Some(port) = Utils::port_suffix(fields[NAME]) else {
            continue;
        };

        records.push(
            ListenerRecord::new(Protocol::from_token(fields[NODE]), port)
                .with_pid(fields[PID])
                .with_process_name(Utils::unescape_lsof(fields[COMMAND])),
        );
    }

    records
}
