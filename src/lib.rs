//! `git-tessera` - git intrinsic issue tracking library
//!
//! This crate provides the core functionality for the `git-tessera` CLI,
//! a flat-file issue tracker that stores every issue ("tessera") as a
//! directory of plain-text files inside a git working tree and mirrors
//! every mutation with a commit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - The `Tessera` data type and keyword vocabulary
//! - [`record`] - Body/info file parsing and serialization
//! - [`storage`] - Flat-file tessera store under `.tesserae/`
//! - [`git`] - Commit/remove adapter over the `git` binary
//! - [`editor`] - External editor invocation
//! - [`config`] - `.tesserae/config` handling
//! - [`format`] - Output formatting (tables)
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod git;
pub mod logging;
pub mod model;
pub mod record;
pub mod storage;
pub mod util;

pub use error::{Result, TesseraError};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
