//! Rm command implementation.
//!
//! Deletes the tessera directory, then commits the removal. A failed
//! commit is reported but the deletion is not undone: the filesystem is
//! at-least-once deleted, the history best-effort committed.

use crate::cli::commands::open_workspace;
use crate::error::Result;

/// Execute the rm command.
///
/// # Errors
///
/// Returns `TesseraNotFound`/`AmbiguousId` for unresolvable ids, `Io`
/// if the directory cannot be deleted, or `CommitFailed`.
pub fn execute(id: &str) -> Result<()> {
    let (git, store) = open_workspace()?;

    let id = store.resolve_id(id)?;
    let tessera = store.load(&id)?;

    tessera.remove()?;
    git.remove_and_commit(
        &[&tessera.path],
        &format!("tessera removed: {}", tessera.title),
    )?;

    println!("Removed tessera with id '{}'", tessera.id);
    Ok(())
}
