//! Opening the registry file in the user's editor.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable naming the preferred editor.
pub const EDITOR_VAR: &str = "EDITOR";

/// Editor used when `$EDITOR` is unset on this platform.
pub fn default_editor() -> &'static str {
    if cfg!(target_os = "windows") {
        "notepad"
    } else {
        "nano"
    }
}

/// Pick the editor command: a non-blank override wins, otherwise the
/// platform default.
pub fn resolve_editor(override_value: Option<&str>) -> String {
    override_value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default_editor())
        .to_string()
}

/// Split an editor command such as `code -w` into program and arguments.
fn split_command(editor: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = editor.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Launches an editor on a file and waits for it to exit.
pub struct EditorLauncher {
    editor: String,
}

impl EditorLauncher {
    /// Use `$EDITOR`, falling back to the platform default.
    pub fn from_env() -> Self {
        let value = std::env::var(EDITOR_VAR).ok();
        Self::new(resolve_editor(value.as_deref()))
    }

    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
        }
    }

    /// Open `path` and wait until the editor exits.
    pub async fn open(&self, path: &Path) -> Result<()> {
        let (program, args) = split_command(&self.editor).ok_or_else(|| Error::EditorLaunch {
            editor: self.editor.clone(),
            reason: "empty editor command".to_string(),
        })?;

        debug!(program, ?args, path = %path.display(), "launching editor");

        let status = Command::new(program)
            .args(&args)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| Error::EditorLaunch {
                editor: self.editor.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::EditorLaunch {
                editor: self.editor.clone(),
                reason: format!("exited with {}", status),
            });
        }

        Ok(())
    }
}
