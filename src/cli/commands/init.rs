//! Init command implementation.
//!
//! Preconditions: inside a git working tree, not already initialized.
//! Creates the `.tesserae/` root, writes the config template and
//! commits it.

use crate::error::Result;
use crate::git::Git;
use crate::storage::TesseraStore;

/// Execute the init command.
///
/// # Errors
///
/// Returns `NotARepository` outside a git working tree,
/// `AlreadyInitialized` when `.tesserae/` exists, or `CommitFailed`
/// when the initial commit fails.
pub fn execute() -> Result<()> {
    let git = Git::discover(std::env::current_dir()?)?;
    let store = TesseraStore::init_at(&git.toplevel()?)?;

    git.commit(
        &[&store.config_path()],
        "tessera repository initialized",
    )?;

    println!(
        "Initialized empty tesserae repository in {}",
        store.root().display()
    );
    Ok(())
}
