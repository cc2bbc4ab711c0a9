//! Parsing and serialization of the two per-tessera text files.
//!
//! The body file is line-oriented: the first non-comment line carries the
//! title (`# <title>`), `//` lines are comments, `@keyword v1, v2` lines
//! assign keywords from a fixed vocabulary, and everything else is
//! description text. The info file is one `key: value` pair per line, no
//! multi-line values.

use std::collections::BTreeMap;

use crate::error::{Result, TesseraError};
use crate::model::Keyword;

/// Parsed content of a body file.
#[derive(Debug, Clone, Default)]
pub struct BodyRecord {
    pub title: String,
    pub description: String,
    pub keywords: BTreeMap<Keyword, Vec<String>>,
}

/// Insertion-ordered string map used for info-file metadata.
///
/// `serialize_info` emits entries in the order they were first inserted,
/// so parse → serialize preserves the file's line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoMap {
    entries: Vec<(String, String)>,
}

impl InfoMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace a value, keeping the original position on
    /// replacement.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InfoMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Parse a body file into title, description and keyword assignments.
///
/// Line 0 supplies the title when it is not a comment; `//` lines are
/// skipped entirely; `@keyword rest` lines split `rest` on commas into
/// trimmed values. Any other line is appended to the description with a
/// trailing newline.
///
/// # Errors
///
/// Returns `UnknownKeyword` when a keyword line names a keyword outside
/// the fixed vocabulary.
pub fn parse_body(text: &str) -> Result<BodyRecord> {
    let mut record = BodyRecord::default();

    for (n, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.starts_with("//") {
            continue;
        }

        if n == 0 {
            record.title = line.trim_start_matches('#').trim().to_string();
        }

        if let Some(rest) = line.strip_prefix('@') {
            let (name, values) = rest.split_once(' ').unwrap_or((rest, ""));
            let keyword = Keyword::parse(name)?;
            let values = values
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
                .collect();
            record.keywords.insert(keyword, values);
        } else {
            record.description.push_str(line);
            record.description.push('\n');
        }
    }

    Ok(record)
}

/// Parse an info file into an insertion-ordered map.
///
/// Each non-blank line is split on the first `:` into a trimmed key and
/// value.
///
/// # Errors
///
/// Returns `MalformedInfo` for a non-blank line without a `:`.
pub fn parse_info(text: &str) -> Result<InfoMap> {
    let mut map = InfoMap::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| TesseraError::MalformedInfo {
                line: line.to_string(),
            })?;
        map.insert(key.trim(), value.trim());
    }

    Ok(map)
}

/// Serialize an info map back to `key: value` lines in insertion order.
#[must_use]
pub fn serialize_info(map: &InfoMap) -> String {
    let mut out = String::new();
    for (key, value) in map.iter() {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out
}
