//! # Append
//!
//! Writes one entry as one all-or-nothing row.
//!
//! ```text
//! connect ──▶ open_cursor ──▶ insert ──▶ commit
//!    │             │            │          │
//!    ✗ Connect     ✗ Cursor     ✗ Execute  ✗ Commit
//!                  │            └────┬─────┘
//!                  │          close_cursor   (always, once opened)
//!                  └──────────▶ close        (always, once connected)
//! ```
//!
//! Failures before the insert leave nothing behind. A failed insert or commit
//! is rolled back by `close_cursor`. Release failures are collected in the
//! report and logged; they never change whether the write succeeded.

use std::fmt;
use std::time::Instant;

use log::{error, info, warn};

use super::backend::{Connector, StoreConnection};
use crate::core::config::TableName;
use crate::core::entry::{Entry, PostText};

/// Why an append did not write its row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendError {
    Connect(String),
    Cursor(String),
    Execute(String),
    Commit(String),
}

impl fmt::Display for AppendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppendError::Connect(msg) => write!(f, "Failed to connect to MySQL: {msg}"),
            AppendError::Cursor(msg) => write!(f, "Failed to create cursor: {msg}"),
            AppendError::Execute(msg) => write!(f, "Failed to execute query: {msg}"),
            AppendError::Commit(msg) => write!(f, "Failed to commit changes: {msg}"),
        }
    }
}

impl std::error::Error for AppendError {}

/// A resource that could not be released cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    Cursor(String),
    Connection(String),
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseError::Cursor(msg) => write!(f, "Failed to close cursor: {msg}"),
            ReleaseError::Connection(msg) => {
                write!(f, "Failed to close database connection: {msg}")
            }
        }
    }
}

impl std::error::Error for ReleaseError {}

/// Everything one append call has to say.
#[derive(Debug)]
pub struct AppendReport {
    /// The entry as written (or as attempted).
    pub entry: Entry,
    pub result: Result<(), AppendError>,
    pub release_errors: Vec<ReleaseError>,
}

impl AppendReport {
    pub fn is_saved(&self) -> bool {
        self.result.is_ok()
    }

    /// Human-readable lines describing the outcome, outcome first.
    pub fn status_lines(&self) -> Vec<String> {
        let mut lines = vec![match &self.result {
            Ok(()) => "Data inserted successfully".to_string(),
            Err(e) => e.to_string(),
        }];
        lines.extend(self.release_errors.iter().map(|e| e.to_string()));
        lines
    }
}

/// Stamp `text` with the current time and append it to `table`.
pub async fn append(connector: &dyn Connector, table: &TableName, text: PostText) -> AppendReport {
    let entry = Entry::stamp(text);
    let started_at = Instant::now();
    info!(
        "event=append status=start backend={} table={}",
        connector.name(),
        table
    );

    let mut release_errors = Vec::new();
    let result = match connector.connect().await {
        Err(e) => Err(AppendError::Connect(e.to_string())),
        Ok(mut conn) => {
            let result = write_in_cursor(conn.as_mut(), table, &entry, &mut release_errors).await;
            if let Err(e) = conn.close().await {
                release_errors.push(ReleaseError::Connection(e.to_string()));
            }
            result
        }
    };

    match &result {
        Ok(()) => info!(
            "event=append status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(e) => error!(
            "event=append status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            e
        ),
    }
    for e in &release_errors {
        warn!("event=append status=release_error error={}", e);
    }

    AppendReport {
        entry,
        result,
        release_errors,
    }
}

async fn write_in_cursor(
    conn: &mut dyn StoreConnection,
    table: &TableName,
    entry: &Entry,
    release_errors: &mut Vec<ReleaseError>,
) -> Result<(), AppendError> {
    conn.open_cursor()
        .await
        .map_err(|e| AppendError::Cursor(e.to_string()))?;

    let result = insert_and_commit(conn, table, entry).await;

    if let Err(e) = conn.close_cursor().await {
        release_errors.push(ReleaseError::Cursor(e.to_string()));
    }
    result
}

async fn insert_and_commit(
    conn: &mut dyn StoreConnection,
    table: &TableName,
    entry: &Entry,
) -> Result<(), AppendError> {
    let rows = conn
        .insert(table, entry)
        .await
        .map_err(|e| AppendError::Execute(e.to_string()))?;
    if rows != 1 {
        return Err(AppendError::Execute(format!(
            "expected 1 row affected, got {rows}"
        )));
    }
    conn.commit()
        .await
        .map_err(|e| AppendError::Commit(e.to_string()))
}
