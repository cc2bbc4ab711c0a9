//! Configuration management for `git-tessera`.
//!
//! Configuration lives in a single TOML file at `.tesserae/config`,
//! created from a template by `init`. Only the `[core]` table is
//! currently defined:
//!
//! ```toml
//! [core]
//! editor = "vim"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TesseraError};

/// Parsed `.tesserae/config` contents.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TesseraConfig {
    #[serde(default)]
    pub core: CoreConfig,
}

/// The `[core]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoreConfig {
    /// Preferred editor command. Takes precedence over `sensible-editor`
    /// and `$EDITOR`.
    pub editor: Option<String>,
}

impl TesseraConfig {
    /// Load the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if the file does not exist and `Config`
    /// if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TesseraError::ConfigMissing(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| TesseraError::Config(format!("{}: {e}", path.display())))
    }

    /// The configured editor command, if any.
    #[must_use]
    pub fn editor(&self) -> Option<&str> {
        self.core.editor.as_deref()
    }
}
