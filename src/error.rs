//! Error types for `git-tessera`.
//!
//! Every variant is user-facing: the CLI prints the `Display` form
//! verbatim behind an `Error: ` prefix. Low-level filesystem and git
//! failures are wrapped into this taxonomy at the storage and command
//! boundaries rather than leaked raw.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for tessera operations.
#[derive(Error, Debug)]
pub enum TesseraError {
    // === Repository Errors ===
    /// The current directory is not inside a git working tree.
    #[error("not a git repository")]
    NotARepository,

    /// The working tree has no `.tesserae` root yet.
    #[error("not a tesserae repository (run `git-tessera init` first)")]
    NotInitialized,

    /// `init` was called on an already-initialized working tree.
    #[error("already initialized tesserae repository in {}", path.display())]
    AlreadyInitialized { path: PathBuf },

    // === Tessera Errors ===
    /// No tessera id matches the given prefix.
    #[error("cannot find tessera with id '{id}'")]
    TesseraNotFound { id: String },

    /// A short id prefix matches more than one tessera.
    #[error("tessera id '{prefix}' is ambiguous: matches {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    /// A body file uses a keyword outside the fixed vocabulary.
    #[error("tessera keyword '{keyword}' does not exist. Use one keyword from '{allowed}'")]
    UnknownKeyword { keyword: String, allowed: String },

    /// An info file line is not `key: value`.
    #[error("malformed info line (expected 'key: value'): '{line}'")]
    MalformedInfo { line: String },

    // === Listing Errors ===
    /// `ls --order-by` named a column that does not exist.
    #[error(
        "cannot order by '{column}' because this column does not exist. Available columns are: '{allowed}'"
    )]
    InvalidOrderColumn { column: String, allowed: String },

    // === Editor Errors ===
    /// No editor could be resolved from config, sensible-editor or $EDITOR.
    #[error(
        "no editor found to open files. Please configure core.editor in your tesserae configuration"
    )]
    NoEditorFound,

    /// The editor exited with a non-zero status; the operation is aborted.
    #[error("edit aborted (editor exited with non-zero status)")]
    EditAborted,

    // === Configuration Errors ===
    /// The `.tesserae/config` file is missing.
    #[error("cannot find config file at '{}'", .0.display())]
    ConfigMissing(PathBuf),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    // === Version-Control Errors ===
    /// A git commit (or staged removal) failed.
    #[error("cannot commit: {0}")]
    CommitFailed(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using `TesseraError`.
pub type Result<T> = std::result::Result<T, TesseraError>;
