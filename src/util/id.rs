//! Tessera id generation.
//!
//! Ids are hyphenated lowercase UUIDv7 strings. v7 embeds a millisecond
//! timestamp in the high bits, so ids sort in creation order and the
//! first segment makes a usable short id almost immediately.

use uuid::Uuid;

/// Generate a fresh, time-ordered tessera id.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}
