//! # Form State
//!
//! Core state for one input session. Domain logic only: no TUI types.
//! The editable buffer itself lives in the `tui` module; core only sees the
//! text once the user commits it.
//!
//! ```text
//! Form
//! ├── stage: Stage             // where the session is
//! └── status_message: String   // prompt shown under the text field
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::entry::PostText;

pub const EDITING_PROMPT: &str = "Editing Text: Press Ctrl+G when done.";
pub const CONFIRM_PROMPT: &str = "Press Enter to save the entry or 'q' to quit.";
pub const EMPTY_PROMPT: &str = "Please fill in the text field. Press Enter to retry.";

/// Where the session currently is.
///
/// ```text
/// Editing ──commit(non-empty)──▶ Confirming ──Enter──▶ Saved
///    ▲  │                             └──────'q'────▶ Discarded
///    │  └─commit(blank)──▶ EmptyNotice
///    └────────any key────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// The text field has focus.
    Editing,
    /// The last commit was blank; waiting for a key before editing again.
    EmptyNotice,
    /// Text is ready; waiting for save or discard.
    Confirming(PostText),
}

#[derive(Debug)]
pub struct Form {
    pub stage: Stage,
    pub status_message: String,
}

impl Form {
    pub fn new() -> Self {
        Self {
            stage: Stage::Editing,
            status_message: EDITING_PROMPT.to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.stage, Stage::Editing)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}
