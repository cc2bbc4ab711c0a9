//! Flat-file tessera store.
//!
//! All tesserae live under a `.tesserae/` directory at the top level of
//! the git working tree: one subdirectory per tessera, holding a body
//! file and an info file. This module owns enumeration, short-id
//! resolution, creation from the body template, removal, and the
//! row-building / filtering / ordering behind `ls`.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::error::{Result, TesseraError};
use crate::model::{INFO_FILENAME, Keyword, TESSERA_FILENAME, Tessera, UPDATED_FORMAT};
use crate::record::{InfoMap, serialize_info};
use crate::util::id::generate_id;

/// Name of the marker directory under the working tree's top level.
pub const ROOT_DIRECTORY: &str = ".tesserae";

/// Placeholder line replaced by `# <title>` when a body is created.
const TITLE_PLACEHOLDER: &str = "@title@";

/// Built-in template for new tessera bodies.
pub const NEW_TESSERA_TEMPLATE: &str = include_str!("../../templates/new_tessera");

/// Built-in template for the `.tesserae/config` file.
pub const CONFIG_TEMPLATE: &str = include_str!("../../templates/config");

/// Display header for the `ls` table.
pub const LS_HEADER: [&str; 7] = [
    "Id",
    "Title",
    "Status",
    "Type",
    "Priority",
    "Author",
    "Last updated",
];

/// Column keys accepted by `--order-by`, index-aligned with `LS_HEADER`.
pub const LS_COLUMNS: [&str; 7] = [
    "id", "title", "status", "type", "priority", "author", "updated",
];

/// One rendered `ls` row.
pub type LsRow = [String; 7];

/// Filtering and ordering options for `ls`.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Column key to order by (see [`LS_COLUMNS`]), case-insensitive.
    pub order_by: String,
    /// Sort descending instead of ascending.
    pub descending: bool,
    /// When non-empty, keep only tesserae whose `type` values intersect
    /// this set.
    pub filter_types: Vec<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            order_by: "priority".to_string(),
            descending: false,
            filter_types: Vec::new(),
        }
    }
}

/// Store of tesserae under one `.tesserae/` root.
#[derive(Debug, Clone)]
pub struct TesseraStore {
    root: PathBuf,
    body_template: String,
}

impl TesseraStore {
    /// Initialize a fresh `.tesserae/` root under `toplevel` and write
    /// the config template into it.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if the root already exists, or `Io`
    /// on filesystem failure.
    pub fn init_at(toplevel: &Path) -> Result<Self> {
        let root = toplevel.join(ROOT_DIRECTORY);
        if root.exists() {
            return Err(TesseraError::AlreadyInitialized { path: root });
        }
        std::fs::create_dir_all(&root)?;
        std::fs::write(root.join("config"), CONFIG_TEMPLATE)?;
        debug!(root = %root.display(), "initialized tesserae root");
        Ok(Self::at_root(root))
    }

    /// Open the existing `.tesserae/` root under `toplevel`.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if the root directory does not exist.
    pub fn open(toplevel: &Path) -> Result<Self> {
        let root = toplevel.join(ROOT_DIRECTORY);
        if !root.is_dir() {
            return Err(TesseraError::NotInitialized);
        }
        Ok(Self::at_root(root))
    }

    /// Build a store directly on a root directory.
    #[must_use]
    pub fn at_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            body_template: NEW_TESSERA_TEMPLATE.to_string(),
        }
    }

    /// Replace the body template used by [`create`](Self::create).
    #[must_use]
    pub fn with_body_template(mut self, template: impl Into<String>) -> Self {
        self.body_template = template.into();
        self
    }

    /// The `.tesserae/` root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the config file inside the root.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Resolve a (possibly short) id prefix to the full tessera id.
    ///
    /// # Errors
    ///
    /// Returns `TesseraNotFound` when nothing matches and `AmbiguousId`
    /// when more than one tessera matches the prefix.
    pub fn resolve_id(&self, prefix: &str) -> Result<String> {
        let mut matches: Vec<String> = self
            .tessera_dir_names()?
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .collect();
        matches.sort();

        match matches.len() {
            0 => Err(TesseraError::TesseraNotFound {
                id: prefix.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(TesseraError::AmbiguousId {
                prefix: prefix.to_string(),
                matches,
            }),
        }
    }

    /// Load one tessera by full id.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessera's files are missing or malformed.
    pub fn load(&self, id: &str) -> Result<Tessera> {
        Tessera::load(id, self.root.join(id))
    }

    /// Load every tessera under the root, sorted by id.
    ///
    /// Non-directory entries are ignored; a tessera that fails to parse
    /// fails the whole listing.
    ///
    /// # Errors
    ///
    /// Returns the first load failure encountered.
    pub fn list_all(&self) -> Result<Vec<Tessera>> {
        let mut ids = self.tessera_dir_names()?;
        ids.sort();
        ids.iter().map(|id| self.load(id)).collect()
    }

    /// Create a new tessera: allocate an id, materialize the body from
    /// the template and write the initial info file.
    ///
    /// `author` and `email` come from the ambient git identity; the
    /// `updated` stamp is the current local time.
    ///
    /// # Errors
    ///
    /// Returns `Io` on filesystem failure.
    pub fn create(&self, title: &str, author: &str, email: &str) -> Result<Tessera> {
        let id = generate_id();
        let path = self.root.join(&id);
        std::fs::create_dir(&path)?;

        let mut body = String::new();
        for line in self.body_template.lines() {
            if line == TITLE_PLACEHOLDER {
                body.push_str(&format!("# {title}"));
            } else {
                body.push_str(line);
            }
            body.push('\n');
        }
        std::fs::write(path.join(TESSERA_FILENAME), body)?;

        let updated = Local::now().format(UPDATED_FORMAT).to_string();
        let info: InfoMap = [("author", author), ("email", email), ("updated", updated.as_str())]
            .into_iter()
            .collect();
        std::fs::write(path.join(INFO_FILENAME), serialize_info(&info))?;

        debug!(%id, %title, "created tessera");
        self.load(&id)
    }

    /// Build, filter and order the `ls` rows.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOrderColumn` for an unknown order column, or any
    /// tessera load failure.
    pub fn ls_rows(&self, options: &ListOptions) -> Result<Vec<LsRow>> {
        let tesserae = self.list_all()?;

        let mut rows: Vec<LsRow> = tesserae
            .iter()
            .filter(|t| matches_type_filter(t, &options.filter_types))
            .map(ls_row)
            .collect();

        let column = options.order_by.to_lowercase();
        let index = LS_COLUMNS
            .iter()
            .position(|c| *c == column)
            .ok_or_else(|| TesseraError::InvalidOrderColumn {
                column: options.order_by.clone(),
                allowed: LS_COLUMNS.join(", "),
            })?;

        // All-digit columns compare numerically, everything else
        // lexicographically.
        let numeric = !rows.is_empty()
            && rows
                .iter()
                .all(|r| !r[index].is_empty() && r[index].chars().all(|c| c.is_ascii_digit()));
        if numeric {
            rows.sort_by_key(|r| r[index].parse::<u64>().unwrap_or(u64::MAX));
        } else {
            rows.sort_by(|a, b| a[index].cmp(&b[index]));
        }
        if options.descending {
            rows.reverse();
        }

        Ok(rows)
    }

    /// Names of immediate subdirectories of the root.
    fn tessera_dir_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

/// Keep a tessera when the filter set is empty or its `type` values
/// intersect it.
fn matches_type_filter(tessera: &Tessera, filter_types: &[String]) -> bool {
    if filter_types.is_empty() {
        return true;
    }
    tessera
        .keyword_values(Keyword::Type)
        .is_some_and(|values| values.iter().any(|v| filter_types.contains(v)))
}

/// Row layout: short id, title, status, type, priority, author, updated.
fn ls_row(tessera: &Tessera) -> LsRow {
    [
        tessera.short_id().to_string(),
        tessera.title.clone(),
        keyword_cell(tessera, Keyword::Status, "unknown"),
        keyword_cell(tessera, Keyword::Type, "unknown"),
        keyword_cell(tessera, Keyword::Priority, "0"),
        tessera.metadata.get("author").unwrap_or("unknown").to_string(),
        tessera.metadata.get("updated").unwrap_or("unknown").to_string(),
    ]
}

fn keyword_cell(tessera: &Tessera, keyword: Keyword, fallback: &str) -> String {
    match tessera.keyword_values(keyword) {
        Some(values) if !values.is_empty() => values.join(", "),
        _ => fallback.to_string(),
    }
}
