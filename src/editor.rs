//! External editor invocation.
//!
//! The editor is resolved in this order:
//!
//! 1. `core.editor` from `.tesserae/config`
//! 2. the `sensible-editor` command, if available on `PATH`
//! 3. the `$EDITOR` environment variable
//! 4. otherwise `NoEditorFound`
//!
//! Invocation blocks until the editor exits. A non-zero exit status is
//! the abort signal: callers must not commit anything after it.

use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::config::TesseraConfig;
use crate::error::{Result, TesseraError};

/// Open `files` in the resolved editor and wait for it to exit.
///
/// # Errors
///
/// Returns `NoEditorFound` if no editor resolves, or `Io` if the
/// resolved editor fails to spawn.
pub fn open(files: &[impl AsRef<Path>], config: &TesseraConfig) -> Result<ExitStatus> {
    if let Some(editor) = config.editor() {
        return run_editor(editor, files);
    }

    match run_editor("sensible-editor", files) {
        Err(TesseraError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        other => return other,
    }

    match std::env::var("EDITOR") {
        Ok(editor) if !editor.trim().is_empty() => run_editor(&editor, files),
        _ => Err(TesseraError::NoEditorFound),
    }
}

/// Spawn an editor command line against `files` and wait.
///
/// The command is split on whitespace so configured values like
/// `"code --wait"` work; no shell quoting is supported.
fn run_editor(command: &str, files: &[impl AsRef<Path>]) -> Result<ExitStatus> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or(TesseraError::NoEditorFound)?;

    debug!(%command, "opening editor");
    let status = Command::new(program)
        .args(parts)
        .args(files.iter().map(|f| f.as_ref().as_os_str()))
        .status()?;
    Ok(status)
}
