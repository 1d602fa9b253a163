//! MySQL backend on top of `sqlx`.
//!
//! One `MySqlConnection` per append, no pool. The write cursor is an explicit
//! transaction driven with plain `START TRANSACTION` / `COMMIT` / `ROLLBACK`
//! statements, so the connection can be owned by the `StoreConnection`
//! object instead of being borrowed by a `sqlx::Transaction`.

use async_trait::async_trait;
use log::{LevelFilter, debug, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection, Executor};

use super::backend::{BackendError, Connector, StoreConnection};
use crate::core::config::{ResolvedConfig, TableName};
use crate::core::entry::Entry;

pub struct MySqlConnector {
    options: MySqlConnectOptions,
    endpoint: String,
}

impl MySqlConnector {
    pub fn new(config: &ResolvedConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .log_statements(LevelFilter::Debug);

        Self {
            options,
            endpoint: format!(
                "{}@{}:{}/{}",
                config.user, config.host, config.port, config.database
            ),
        }
    }
}

#[async_trait]
impl Connector for MySqlConnector {
    fn name(&self) -> &str {
        "mysql"
    }

    async fn connect(&self) -> Result<Box<dyn StoreConnection>, BackendError> {
        info!("Connecting to {}", self.endpoint);
        let conn = MySqlConnection::connect_with(&self.options).await?;
        Ok(Box::new(MySqlStoreConnection {
            conn,
            in_transaction: false,
        }))
    }
}

struct MySqlStoreConnection {
    conn: MySqlConnection,
    in_transaction: bool,
}

#[async_trait]
impl StoreConnection for MySqlStoreConnection {
    async fn open_cursor(&mut self) -> Result<(), BackendError> {
        self.conn.execute("START TRANSACTION").await?;
        self.in_transaction = true;
        Ok(())
    }

    async fn insert(&mut self, table: &TableName, entry: &Entry) -> Result<u64, BackendError> {
        let sql = insert_statement(table);
        debug!("Executing: {}", sql);
        let result = sqlx::query(&sql)
            .bind(entry.text.as_str())
            .bind(entry.created_at)
            .execute(&mut self.conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn commit(&mut self) -> Result<(), BackendError> {
        self.conn.execute("COMMIT").await?;
        self.in_transaction = false;
        Ok(())
    }

    async fn close_cursor(&mut self) -> Result<(), BackendError> {
        if self.in_transaction {
            self.in_transaction = false;
            self.conn.execute("ROLLBACK").await?;
        }
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), BackendError> {
        self.conn.close().await?;
        Ok(())
    }
}

/// The one statement this crate ever sends with user data in it.
pub fn insert_statement(table: &TableName) -> String {
    format!("INSERT INTO {} (text, date_time) VALUES (?, ?)", table.quoted())
}
