//! Data types: the [`Tessera`] record and its fixed keyword vocabulary.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::Local;

use crate::error::{Result, TesseraError};
use crate::record::{self, InfoMap};

/// File name of the body file inside a tessera directory.
pub const TESSERA_FILENAME: &str = "tessera";
/// File name of the metadata file inside a tessera directory.
pub const INFO_FILENAME: &str = "info";

/// Timestamp format used for the `updated` metadata field (local time,
/// no timezone).
pub const UPDATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The fixed vocabulary of body-file keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Keyword {
    Status,
    Type,
    Priority,
    Tags,
}

impl Keyword {
    /// All keywords, in canonical order.
    pub const ALL: [Self; 4] = [Self::Status, Self::Type, Self::Priority, Self::Tags];

    /// The keyword name as it appears in a body file (without the `@`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Type => "type",
            Self::Priority => "priority",
            Self::Tags => "tags",
        }
    }

    /// Human-readable list of all keyword names, used in error messages.
    #[must_use]
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Parse a keyword name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownKeyword` if the name is not in the vocabulary.
    pub fn parse(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .ok_or_else(|| TesseraError::UnknownKeyword {
                keyword: name.to_string(),
                allowed: Self::allowed_list(),
            })
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tracked issue: a directory holding a body file and an info
/// file.
///
/// Everything except `id` and `path` is re-derived from the files on
/// every load; nothing here is cached across processes.
#[derive(Debug, Clone)]
pub struct Tessera {
    /// Full unique id (time-ordered UUID string), also the directory name.
    pub id: String,
    /// Directory holding the tessera's files.
    pub path: PathBuf,
    /// First non-comment line of the body, leading `#` stripped.
    pub title: String,
    /// Body lines that are neither keyword lines nor comments.
    pub description: String,
    /// Keyword assignments from `@keyword v1, v2` body lines.
    pub keywords: BTreeMap<Keyword, Vec<String>>,
    /// Free-form metadata from the info file (author, email, updated, ...).
    pub metadata: InfoMap,
    /// Verbatim body file content, as shown by `show`.
    pub raw_body: String,
}

impl Tessera {
    /// Load a tessera from its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing or malformed, or if
    /// the body uses an unknown keyword.
    pub fn load(id: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        let id = id.into();
        let path = path.into();

        let raw_body = std::fs::read_to_string(path.join(TESSERA_FILENAME))?;
        let raw_info = std::fs::read_to_string(path.join(INFO_FILENAME))?;

        let body = record::parse_body(&raw_body)?;
        let metadata = record::parse_info(&raw_info)?;

        Ok(Self {
            id,
            path,
            title: body.title,
            description: body.description,
            keywords: body.keywords,
            metadata,
            raw_body,
        })
    }

    /// The unique-enough prefix used to reference this tessera on the
    /// command line: the first hyphen-separated segment of the id.
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.split('-').next().unwrap_or(&self.id)
    }

    /// Path of the body file.
    #[must_use]
    pub fn body_file(&self) -> PathBuf {
        self.path.join(TESSERA_FILENAME)
    }

    /// Path of the info file.
    #[must_use]
    pub fn info_file(&self) -> PathBuf {
        self.path.join(INFO_FILENAME)
    }

    /// Values of a keyword, if assigned in the body.
    #[must_use]
    pub fn keyword_values(&self, keyword: Keyword) -> Option<&[String]> {
        self.keywords.get(&keyword).map(Vec::as_slice)
    }

    /// Refresh the `updated` timestamp and rewrite the info file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the info file cannot be written.
    pub fn update(&mut self) -> Result<()> {
        let now = Local::now().format(UPDATED_FORMAT).to_string();
        self.metadata.insert("updated", now);
        std::fs::write(self.info_file(), record::serialize_info(&self.metadata))?;
        Ok(())
    }

    /// Recursively delete this tessera's directory.
    ///
    /// Irreversible at the filesystem level; callers pair this with a
    /// version-control removal commit.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be removed.
    pub fn remove(&self) -> Result<()> {
        std::fs::remove_dir_all(&self.path)?;
        Ok(())
    }
}
