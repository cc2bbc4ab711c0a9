//! Edit command implementation.
//!
//! Resolves the id, hands the existing body file to the editor,
//! refreshes the `updated` metadata and commits both files. An aborted
//! edit commits nothing; a failed commit is reported without undoing
//! the edit already made to the working file.

use crate::cli::commands::open_workspace;
use crate::config::TesseraConfig;
use crate::editor;
use crate::error::{Result, TesseraError};

/// Execute the edit command.
///
/// # Errors
///
/// Returns `TesseraNotFound`/`AmbiguousId` for unresolvable ids,
/// `EditAborted` when the editor exits non-zero, or `CommitFailed`.
pub fn execute(id: &str) -> Result<()> {
    let (git, store) = open_workspace()?;
    let config = TesseraConfig::load(&store.config_path())?;

    let id = store.resolve_id(id)?;
    let mut tessera = store.load(&id)?;

    let status = editor::open(&[&tessera.body_file()], &config)?;
    if !status.success() {
        return Err(TesseraError::EditAborted);
    }

    tessera.update()?;
    git.commit(
        &[&tessera.body_file(), &tessera.info_file()],
        &format!("tessera updated: {}", tessera.title),
    )?;

    println!("Updated tessera {}", tessera.short_id());
    Ok(())
}
