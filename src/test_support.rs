//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::config::TableName;
use crate::core::entry::Entry;
use crate::store::{BackendError, Connector, StoreConnection};
use crate::tui::event::{EventSource, TuiEvent};

/// A store operation, as seen by the fake backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Connect,
    OpenCursor,
    Insert,
    Commit,
    CloseCursor,
    Close,
}

/// Where the fake backend should fail.
pub type Step = Call;

#[derive(Default)]
struct Ledger {
    calls: Vec<Call>,
    pending: Vec<(String, Entry)>,
    committed: Vec<(String, Entry)>,
    open_connections: usize,
}

/// An in-memory store that records every call and can fail at one step.
pub struct FakeConnector {
    ledger: Arc<Mutex<Ledger>>,
    fail_at: Option<Step>,
    rows_affected: u64,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self {
            ledger: Arc::new(Mutex::new(Ledger::default())),
            fail_at: None,
            rows_affected: 1,
        }
    }

    pub fn failing_at(step: Step) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::new()
        }
    }

    pub fn with_rows_affected(mut self, rows: u64) -> Self {
        self.rows_affected = rows;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.ledger.lock().unwrap().calls.clone()
    }

    /// Committed rows as `(table, entry)`.
    pub fn rows(&self) -> Vec<(String, Entry)> {
        self.ledger.lock().unwrap().committed.clone()
    }

    pub fn open_connections(&self) -> usize {
        self.ledger.lock().unwrap().open_connections
    }
}

fn record(ledger: &Mutex<Ledger>, fail_at: Option<Step>, call: Call) -> Result<(), BackendError> {
    ledger.lock().unwrap().calls.push(call);
    if fail_at == Some(call) {
        let step = match call {
            Call::Connect => "connect",
            Call::OpenCursor => "cursor",
            Call::Insert => "insert",
            Call::Commit => "commit",
            Call::CloseCursor => "cursor close",
            Call::Close => "close",
        };
        return Err(BackendError(format!("injected {step} failure")));
    }
    Ok(())
}

#[async_trait]
impl Connector for FakeConnector {
    fn name(&self) -> &str {
        "fake"
    }

    async fn connect(&self) -> Result<Box<dyn StoreConnection>, BackendError> {
        record(&self.ledger, self.fail_at, Call::Connect)?;
        self.ledger.lock().unwrap().open_connections += 1;
        Ok(Box::new(FakeConnection {
            ledger: self.ledger.clone(),
            fail_at: self.fail_at,
            rows_affected: self.rows_affected,
        }))
    }
}

struct FakeConnection {
    ledger: Arc<Mutex<Ledger>>,
    fail_at: Option<Step>,
    rows_affected: u64,
}

#[async_trait]
impl StoreConnection for FakeConnection {
    async fn open_cursor(&mut self) -> Result<(), BackendError> {
        record(&self.ledger, self.fail_at, Call::OpenCursor)
    }

    async fn insert(&mut self, table: &TableName, entry: &Entry) -> Result<u64, BackendError> {
        record(&self.ledger, self.fail_at, Call::Insert)?;
        if self.rows_affected > 0 {
            self.ledger
                .lock()
                .unwrap()
                .pending
                .push((table.to_string(), entry.clone()));
        }
        Ok(self.rows_affected)
    }

    async fn commit(&mut self) -> Result<(), BackendError> {
        record(&self.ledger, self.fail_at, Call::Commit)?;
        let mut ledger = self.ledger.lock().unwrap();
        let pending = std::mem::take(&mut ledger.pending);
        ledger.committed.extend(pending);
        Ok(())
    }

    async fn close_cursor(&mut self) -> Result<(), BackendError> {
        // Rollback happens even when reporting a failure.
        self.ledger.lock().unwrap().pending.clear();
        record(&self.ledger, self.fail_at, Call::CloseCursor)
    }

    async fn close(self: Box<Self>) -> Result<(), BackendError> {
        self.ledger.lock().unwrap().open_connections -= 1;
        record(&self.ledger, self.fail_at, Call::Close)
    }
}

/// Replays a fixed list of events, then reports end of input.
pub struct ScriptedEvents {
    events: VecDeque<TuiEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = TuiEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Typing `text` one character at a time.
    pub fn typed(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
