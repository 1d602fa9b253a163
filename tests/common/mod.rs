//! Shared fixtures for the integration tests.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use microjot::core::config::TableName;
use microjot::core::entry::Entry;
use microjot::store::{BackendError, Connector, StoreConnection};
use microjot::tui::event::{EventSource, TuiEvent};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

pub fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

/// Keystrokes for typing `text`, followed by `then`.
pub fn keys(text: &str, then: &[TuiEvent]) -> Vec<TuiEvent> {
    text.chars()
        .map(TuiEvent::InputChar)
        .chain(then.iter().cloned())
        .collect()
}

pub struct Script(VecDeque<TuiEvent>);

impl Script {
    pub fn new(events: Vec<TuiEvent>) -> Self {
        Self(events.into())
    }
}

impl EventSource for Script {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

/// A table in memory. Rows appear only on commit.
#[derive(Clone, Default)]
pub struct MemoryTable {
    rows: Arc<Mutex<Vec<Entry>>>,
    connects: Arc<Mutex<usize>>,
}

impl MemoryTable {
    pub fn rows(&self) -> Vec<Entry> {
        self.rows.lock().unwrap().clone()
    }

    pub fn connects(&self) -> usize {
        *self.connects.lock().unwrap()
    }
}

#[async_trait]
impl Connector for MemoryTable {
    fn name(&self) -> &str {
        "memory"
    }

    async fn connect(&self) -> Result<Box<dyn StoreConnection>, BackendError> {
        *self.connects.lock().unwrap() += 1;
        Ok(Box::new(MemoryConnection {
            table: self.clone(),
            pending: Vec::new(),
        }))
    }
}

struct MemoryConnection {
    table: MemoryTable,
    pending: Vec<Entry>,
}

#[async_trait]
impl StoreConnection for MemoryConnection {
    async fn open_cursor(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    async fn insert(&mut self, _table: &TableName, entry: &Entry) -> Result<u64, BackendError> {
        self.pending.push(entry.clone());
        Ok(1)
    }

    async fn commit(&mut self) -> Result<(), BackendError> {
        self.table
            .rows
            .lock()
            .unwrap()
            .extend(self.pending.drain(..));
        Ok(())
    }

    async fn close_cursor(&mut self) -> Result<(), BackendError> {
        self.pending.clear();
        Ok(())
    }

    async fn close(self: Box<Self>) -> Result<(), BackendError> {
        Ok(())
    }
}

/// A server that is never there.
pub struct Unreachable;

#[async_trait]
impl Connector for Unreachable {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn connect(&self) -> Result<Box<dyn StoreConnection>, BackendError> {
        Err(BackendError(
            "error communicating with database: failed to lookup address information".to_string(),
        ))
    }
}
