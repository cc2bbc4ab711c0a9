//! Create command implementation.
//!
//! State machine: allocate the tessera, hand its body file to the
//! editor, then commit both files. An editor abort or a failed commit
//! rolls the allocation back by deleting the directory, so no
//! half-created tessera survives the command.

use crate::cli::commands::open_workspace;
use crate::config::TesseraConfig;
use crate::editor;
use crate::error::{Result, TesseraError};

/// Execute the create command.
///
/// # Errors
///
/// Returns `EditAborted` when the editor exits non-zero and
/// `CommitFailed` when git rejects the commit; in both cases the
/// allocated directory has already been removed.
pub fn execute(title: &str) -> Result<()> {
    let (git, store) = open_workspace()?;
    let config = TesseraConfig::load(&store.config_path())?;

    let (author, email) = git.user_identity();
    let tessera = store.create(title, &author, &email)?;

    let status = match editor::open(&[&tessera.body_file()], &config) {
        Ok(status) => status,
        Err(e) => {
            tessera.remove()?;
            return Err(e);
        }
    };
    if !status.success() {
        tessera.remove()?;
        return Err(TesseraError::EditAborted);
    }

    let commit = git.commit(
        &[&tessera.body_file(), &tessera.info_file()],
        &format!("tessera created: {title}"),
    );
    if let Err(e) = commit {
        tessera.remove()?;
        return Err(e);
    }

    println!("Created new tessera with id {}", tessera.id);
    Ok(())
}
