//! # Entries
//!
//! The one thing microjot stores: a short piece of text plus the moment it
//! was saved.
//!
//! ```text
//! raw input ──PostText::parse()──▶ PostText ──Entry::stamp()──▶ Entry
//!             (trim, reject empty)             (capture now)
//! ```
//!
//! `PostText` can only be built by `parse`, so anything holding one is
//! already trimmed and non-empty. `Entry` can only be built from a
//! `PostText`, which carries that guarantee all the way to the database.

use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Trimmed, non-empty post text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    /// Trims surrounding whitespace. Returns `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PostText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A post ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub text: PostText,
    /// Local wall-clock time, matching a MySQL `DATETIME` column.
    pub created_at: NaiveDateTime,
}

impl Entry {
    /// Builds an entry timestamped with the current local time.
    pub fn stamp(text: PostText) -> Self {
        Self::at(text, Local::now().naive_local())
    }

    pub fn at(text: PostText, created_at: NaiveDateTime) -> Self {
        Self { text, created_at }
    }
}

/// How an input session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Saved(PostText),
    Discarded,
}
