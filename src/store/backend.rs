use std::fmt;

use async_trait::async_trait;

use crate::core::config::TableName;
use crate::core::entry::Entry;

/// A failure reported by the database client, flattened to its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError(pub String);

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for BackendError {}

impl From<sqlx::Error> for BackendError {
    fn from(e: sqlx::Error) -> Self {
        BackendError(e.to_string())
    }
}

/// Opens connections to the store.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Returns the name of the backend, for logs.
    fn name(&self) -> &str;

    async fn connect(&self) -> Result<Box<dyn StoreConnection>, BackendError>;
}

/// One open connection. The gateway drives it in a fixed order:
///
/// ```text
/// open_cursor → insert → commit → close_cursor → close
/// ```
///
/// `close_cursor` and `close` are called on every path once the matching
/// acquisition succeeded, including after a failed `insert` or `commit`.
#[async_trait]
pub trait StoreConnection: Send {
    /// Start the write transaction.
    async fn open_cursor(&mut self) -> Result<(), BackendError>;

    /// Insert one row; returns the number of rows affected.
    async fn insert(&mut self, table: &TableName, entry: &Entry) -> Result<u64, BackendError>;

    async fn commit(&mut self) -> Result<(), BackendError>;

    /// End the write transaction, rolling back anything not committed.
    async fn close_cursor(&mut self) -> Result<(), BackendError>;

    async fn close(self: Box<Self>) -> Result<(), BackendError>;
}
