//! Show command implementation.
//!
//! Prints the raw body file content verbatim, comments and keyword
//! lines included.

use crate::cli::commands::open_workspace;
use crate::error::Result;

/// Execute the show command.
///
/// # Errors
///
/// Returns `TesseraNotFound`/`AmbiguousId` for unresolvable ids, or a
/// load failure for malformed files.
pub fn execute(id: &str) -> Result<()> {
    let (_git, store) = open_workspace()?;

    let id = store.resolve_id(id)?;
    let tessera = store.load(&id)?;

    print!("{}", tessera.raw_body);
    Ok(())
}
