//! # Store
//!
//! The write side of microjot: append one entry to a MySQL table.
//!
//! - [`backend`]: the `Connector` / `StoreConnection` seam
//! - [`mysql`]: the `sqlx` implementation of that seam
//! - [`gateway`]: `append()`, which drives a connection through one write
//!
//! There is no read path. Rows are only ever inserted.

pub mod backend;
pub mod gateway;
pub mod mysql;

pub use backend::{BackendError, Connector, StoreConnection};
pub use gateway::{AppendError, AppendReport, ReleaseError, append};
pub use mysql::MySqlConnector;
