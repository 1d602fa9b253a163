//! # Actions
//!
//! Everything that can happen during an input session becomes an `Action`.
//! User presses Ctrl+G? That's `Action::CommitText(buffer)`.
//! User presses Enter on the confirmation prompt? That's `Action::Confirm`.
//!
//! The `update()` function takes the current form and an action, mutates the
//! form, and returns an `Effect` telling the caller whether the session is
//! over. No I/O here.
//!
//! ```text
//! Form + Action  →  update()  →  Form' + Effect
//! ```

use log::{debug, info};

use crate::core::entry::{PostText, SessionOutcome};
use crate::core::state::{CONFIRM_PROMPT, EDITING_PROMPT, EMPTY_PROMPT, Form, Stage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user finished editing; carries the raw field content.
    CommitText(String),
    /// Any key pressed while the blank-text notice is shown.
    Acknowledge,
    /// Save the pending text.
    Confirm,
    /// Drop the pending text.
    Discard,
    /// Ctrl+C: leave without saving, whatever the stage.
    Abandon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The text field should be emptied before editing resumes.
    ClearInput,
    Finish(SessionOutcome),
}

pub fn update(form: &mut Form, action: Action) -> Effect {
    debug!("update: stage={:?} action={:?}", form.stage, action);

    match action {
        Action::Abandon => {
            info!("Session abandoned");
            Effect::Finish(SessionOutcome::Discarded)
        }
        Action::CommitText(raw) if form.is_editing() => {
            match PostText::parse(&raw) {
                Some(text) => {
                    form.stage = Stage::Confirming(text);
                    form.status_message = CONFIRM_PROMPT.to_string();
                }
                None => {
                    form.stage = Stage::EmptyNotice;
                    form.status_message = EMPTY_PROMPT.to_string();
                }
            }
            Effect::None
        }
        Action::Acknowledge if form.stage == Stage::EmptyNotice => {
            form.stage = Stage::Editing;
            form.status_message = EDITING_PROMPT.to_string();
            Effect::ClearInput
        }
        Action::Confirm => match &form.stage {
            Stage::Confirming(text) => {
                info!("Entry confirmed ({} bytes)", text.as_str().len());
                Effect::Finish(SessionOutcome::Saved(text.clone()))
            }
            _ => Effect::None,
        },
        Action::Discard if matches!(form.stage, Stage::Confirming(_)) => {
            info!("Entry discarded");
            Effect::Finish(SessionOutcome::Discarded)
        }
        // Anything else has no meaning in the current stage.
        _ => Effect::None,
    }
}
