//! Listener snapshot adapters.
//!
//! The host tool and the grammar used to read it are picked together once,
//! at construction, as a [`ListenerGrammar`].

mod lsof;
mod netstat;
mod utils;

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::domain::ListenerRecord;
use crate::error::{Error, Result};
use crate::ports::ListenerSource;

/// Text grammar of a host's listener enumeration tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerGrammar {
    /// `netstat -ano`: protocol-labelled rows, PID in the last column.
    Netstat,
    /// `lsof -i -P -n`: command-first rows, address in the ninth column.
    Lsof,
}

impl ListenerGrammar {
    /// Grammar for the platform this binary was built for.
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            ListenerGrammar::Netstat
        } else {
            ListenerGrammar::Lsof
        }
    }

    pub fn program(&self) -> &'static str {
        match self {
            ListenerGrammar::Netstat => "netstat",
            ListenerGrammar::Lsof => "lsof",
        }
    }

    pub fn args(&self) -> &'static [&'static str] {
        match self {
            ListenerGrammar::Netstat => &["-ano"],
            ListenerGrammar::Lsof => &["-i", "-P", "-n"],
        }
    }

    /// Parse raw tool output. Unusable lines are skipped.
    pub fn parse(&self, output: &str) -> Vec<ListenerRecord> {
        match self {
            ListenerGrammar::Netstat => netstat::parse(output),
            ListenerGrammar::Lsof => lsof::parse(output),
        }
    }

    /// Decide whether a finished invocation produced a usable snapshot and
    /// return the text to parse.
    ///
    /// Any stderr output or a non-zero exit fails the snapshot. lsof exits
    /// with status 1 and prints nothing when there are no sockets at all;
    /// that case is an empty snapshot.
    fn accept_output(&self, success: bool, stdout: &str, stderr: &str) -> Result<String> {
        let stderr = stderr.trim();
        if !stderr.is_empty() {
            return Err(Error::SnapshotCommand(format!(
                "{} reported: {}",
                self.program(),
                stderr
            )));
        }

        if !success {
            if *self == ListenerGrammar::Lsof && stdout.trim().is_empty() {
                return Ok(String::new());
            }
            return Err(Error::SnapshotCommand(format!(
                "{} exited unsuccessfully",
                self.program()
            )));
        }

        Ok(match self {
            ListenerGrammar::Netstat => stdout.to_string(),
            ListenerGrammar::Lsof => lsof::listening_rows(stdout),
        })
    }
}

/// Reads listeners from the host's enumeration tool.
pub struct ListenerScanner {
    grammar: ListenerGrammar,
}

impl ListenerScanner {
    /// Create a scanner for the current platform.
    pub fn new() -> Self {
        Self::with_grammar(ListenerGrammar::detect())
    }

    pub fn with_grammar(grammar: ListenerGrammar) -> Self {
        Self { grammar }
    }

    /// Run the enumeration tool and return the text to parse.
    pub async fn read_raw(&self) -> Result<String> {
        let program = self.grammar.program();
        debug!(program, args = ?self.grammar.args(), "running listener snapshot");

        let output = Command::new(program)
            .args(self.grammar.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Error::SnapshotCommand(format!("Failed to run {}: {}", program, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        self.grammar
            .accept_output(output.status.success(), &stdout, &stderr)
    }
}

impl Default for ListenerScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerSource for ListenerScanner {
    async fn snapshot(&self) -> Result<Vec<ListenerRecord>> {
        let raw = self.read_raw().await?;
        let records = self.grammar.parse(&raw);
        debug!(
            lines = raw.lines().count(),
            records = records.len(),
            "parsed listener snapshot"
        );
        Ok(records)
    }
}
