//! microjot library exports for testing

pub mod core;
pub mod store;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::config::TableName;
use crate::core::entry::SessionOutcome;
use crate::store::{AppendReport, Connector, append};

/// Hand a finished session to the store. `Discarded` never reaches it.
pub async fn persist(
    outcome: SessionOutcome,
    connector: &dyn Connector,
    table: &TableName,
) -> Option<AppendReport> {
    match outcome {
        SessionOutcome::Saved(text) => Some(append(connector, table, text).await),
        SessionOutcome::Discarded => None,
    }
}

/// Process exit status: non-zero only when a confirmed entry was not saved.
pub fn exit_status(report: Option<&AppendReport>) -> u8 {
    match report {
        Some(report) if !report.is_saved() => 1,
        _ => 0,
    }
}
