//! # TUI Adapter
//!
//! The ratatui-specific layer. Draws the form, reads keys, and translates
//! them into `core::action::Action` values according to the current stage.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Input loop
//!
//! The loop is strictly blocking: draw, wait for one event (no timeout),
//! apply it, repeat. Nothing animates, so there is nothing to redraw
//! between keystrokes.
//!
//! ## Keys per stage
//!
//! | Stage        | Keys                                              |
//! |--------------|---------------------------------------------------|
//! | Editing      | text editing; Enter = newline; Ctrl+G = done      |
//! | EmptyNotice  | any key returns to editing                        |
//! | Confirming   | Enter = save; `q` = discard; anything else ignored |
//!
//! Ctrl+C discards from any stage.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::info;
use std::io::{self, stdout};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::core::action::{Action, Effect, update};
use crate::core::entry::SessionOutcome;
use crate::core::state::{Form, Stage};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TitleBar};
use crate::tui::event::{CrosstermEvents, EventSource, TuiEvent};

pub const FORM_TITLE: &str = "Enter a micro blog post";
pub const FORM_HINT: &str = "Ctrl+C to discard";

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub title_bar: TitleBar,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            title_bar: TitleBar::new(FORM_TITLE, FORM_HINT),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run the input session on the real terminal.
///
/// The terminal is restored before returning, on success and on error.
pub fn run() -> io::Result<SessionOutcome> {
    let mut terminal = ratatui::init();
    let outcome = TerminalModeGuard::new()
        .and_then(|_guard| run_session(&mut terminal, &mut CrosstermEvents));
    ratatui::restore();

    match &outcome {
        Ok(SessionOutcome::Saved(_)) => info!("Session ended: saved"),
        Ok(SessionOutcome::Discarded) => info!("Session ended: discarded"),
        Err(e) => info!("Session ended with terminal error: {}", e),
    }
    outcome
}

/// Drive one input session to its outcome.
///
/// Generic over the backend and the event source so it can run against
/// `TestBackend` with scripted input.
pub fn run_session<B, E>(terminal: &mut Terminal<B>, events: &mut E) -> io::Result<SessionOutcome>
where
    B: Backend,
    E: EventSource,
{
    let mut form = Form::new();
    let mut tui = TuiState::new();

    loop {
        terminal
            .draw(|f| ui::draw_form(f, &form, &mut tui))
            .map_err(|e| io::Error::other(e.to_string()))?;

        let event = events.next_event()?;
        let Some(action) = to_action(&form, &mut tui, &event) else {
            continue;
        };

        match update(&mut form, action) {
            Effect::None => {}
            Effect::ClearInput => tui.input_box.clear(),
            Effect::Finish(outcome) => return Ok(outcome),
        }
    }
}

/// Interpret one event for the current stage. Editing events are applied
/// to the input box here; only stage-changing events become actions.
fn to_action(form: &Form, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Abandon);
    }

    match form.stage {
        Stage::Editing => match tui.input_box.handle_event(event)? {
            InputEvent::Commit(raw) => Some(Action::CommitText(raw)),
            InputEvent::ContentChanged => None,
        },
        Stage::EmptyNotice => match event {
            TuiEvent::Resize | TuiEvent::Paste(_) => None,
            _ => Some(Action::Acknowledge),
        },
        Stage::Confirming(_) => match event {
            TuiEvent::Submit => Some(Action::Confirm),
            TuiEvent::InputChar('q') => Some(Action::Discard),
            _ => None,
        },
    }
}
