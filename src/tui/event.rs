use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Session control
    ForceQuit,  // Ctrl+C
    CommitText, // Ctrl+G: done editing
    Submit,     // Enter: newline while editing, save while confirming

    // Editing
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    WordLeft,
    WordRight,

    /// Any other key. Still counts as "a key press" for prompts.
    OtherKey,
    Resize,
}

/// A blocking source of terminal events.
pub trait EventSource {
    /// Wait (without timeout) for the next meaningful event.
    fn next_event(&mut self) -> io::Result<TuiEvent>;
}

/// Reads from the real terminal via crossterm.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<TuiEvent> {
        loop {
            if let Some(event) = map_event(event::read()?) {
                return Ok(event);
            }
        }
    }
}

/// Translate a raw crossterm event. `None` means "not interesting, read again".
pub fn map_event(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => map_key(key_event),
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Only presses (and repeats) matter; releases arrive on some platforms.
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let event = match key_event.code {
        KeyCode::Char('c') if ctrl => TuiEvent::ForceQuit,
        KeyCode::Char('g') if ctrl => TuiEvent::CommitText,
        // Ctrl+J is a literal line feed in most terminals
        KeyCode::Char('j') if ctrl => TuiEvent::Submit,
        KeyCode::Char(_) if ctrl => TuiEvent::OtherKey,
        KeyCode::Char(c) => TuiEvent::InputChar(c),
        KeyCode::Enter => TuiEvent::Submit,
        KeyCode::Backspace => TuiEvent::Backspace,
        KeyCode::Delete => TuiEvent::Delete,
        KeyCode::Left if ctrl => TuiEvent::WordLeft,
        KeyCode::Right if ctrl => TuiEvent::WordRight,
        KeyCode::Left => TuiEvent::CursorLeft,
        KeyCode::Right => TuiEvent::CursorRight,
        KeyCode::Up => TuiEvent::CursorUp,
        KeyCode::Down => TuiEvent::CursorDown,
        KeyCode::Home => TuiEvent::CursorHome,
        KeyCode::End => TuiEvent::CursorEnd,
        KeyCode::Tab => TuiEvent::InputChar('\t'),
        _ => TuiEvent::OtherKey,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(
            map_event(key(KeyCode::Char('g'), KeyModifiers::CONTROL)),
            Some(TuiEvent::CommitText)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Submit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            Some(TuiEvent::OtherKey)
        );
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            map_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('q'))
        );
        assert_eq!(
            map_event(key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('Q'))
        );
        assert_eq!(
            map_event(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(TuiEvent::Submit)
        );
        assert_eq!(
            map_event(key(KeyCode::F(5), KeyModifiers::NONE)),
            Some(TuiEvent::OtherKey)
        );
        assert_eq!(
            map_event(key(KeyCode::Left, KeyModifiers::CONTROL)),
            Some(TuiEvent::WordLeft)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_paste_resize_and_mouse() {
        assert_eq!(
            map_event(Event::Paste("a\nb".to_string())),
            Some(TuiEvent::Paste("a\nb".to_string()))
        );
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(mouse), None);
        assert_eq!(map_event(Event::FocusGained), None);
    }
}
