//! Command implementations.
//!
//! Each command checks its preconditions up front (working tree,
//! initialized root) before doing any work, then pairs every
//! filesystem mutation with a scoped commit as described on the
//! individual modules.

pub mod create;
pub mod edit;
pub mod init;
pub mod ls;
pub mod rm;
pub mod show;

use crate::error::Result;
use crate::git::Git;
use crate::storage::TesseraStore;

/// Open the git working tree and tessera store for the current
/// directory.
///
/// # Errors
///
/// Returns `NotARepository` outside a git working tree and
/// `NotInitialized` when `.tesserae/` is missing.
fn open_workspace() -> Result<(Git, TesseraStore)> {
    let git = Git::discover(std::env::current_dir()?)?;
    let store = TesseraStore::open(&git.toplevel()?)?;
    Ok((git, store))
}
