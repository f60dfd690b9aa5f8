use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static LSOF_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\x([0-9a-fA-F]{2})").expect("valid escape pattern"));

pub struct Utils;

impl Utils {
    /// Port text of an address column: everything after the last colon.
    ///
    /// Handles every address shape the snapshot tools print:
    /// - IPv4: "127.0.0.1:3000" or "*:8080"
    /// - IPv6: "\[::1]:3000" or "\[::]:135"
    ///
    /// Returns `None` when there is no colon or nothing follows it.
    pub fn port_suffix(address: &str) -> Option<&str> {
        let (_, port) = address.rsplit_once(':')?;
        if port.is_empty() {
            None
        } else {
            Some(port)
        }
    }

    /// Decode lsof's `\xNN` escapes in a command name (e.g. `Code\x20Helper`).
    pub fn unescape_lsof(name: &str) -> Cow<'_, str> {
        LSOF_ESCAPE.replace_all(name, |caps: &Captures| {
            u8::from_str_radix(&caps[1], 16)
                .ok()
                .filter(u8::is_ascii)
                .map(|b| char::from(b).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
    }
}
