//! # InputBox Component
//!
//! The editable "Text" field of the form.
//!
//! ## Responsibilities
//!
//! - Capture text input, including newlines (Enter) and pastes
//! - Handle editing (backspace, delete, cursor and word movement)
//! - Emit `Commit` with the raw buffer on Ctrl+G
//! - Draw the field, dimmed while it does not have focus
//!
//! ## State Management
//!
//! The buffer is internal state; trimming and validation happen in core
//! after commit. Cursor position and scroll state live in `CursorState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, next_word_boundary,
    prev_char_boundary, prev_word_boundary, wrap_line_count,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Editing finished (Ctrl+G); carries the untrimmed buffer
    Commit(String),
    /// Buffer or cursor changed
    ContentChanged,
}

/// Multi-line text field.
///
/// # Props
///
/// - `focused`: whether keystrokes go to this field (set by the parent)
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: cursor position and scroll (see `CursorState`)
pub struct InputBox {
    pub buffer: String,
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Height of the field: always room for the full visible window.
    pub fn height() -> u16 {
        MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor.reset();
    }

    /// Number of wrapped lines the current buffer needs at `content_width`.
    pub fn line_count(&self, content_width: u16) -> u16 {
        wrap_line_count(&self.buffer, inner_width(content_width))
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let total_lines = self.line_count(area.width);
        if total_lines <= MAX_VISIBLE_LINES {
            return;
        }

        // content_length is the max scroll position, not the item count
        let max_scroll = total_lines.saturating_sub(MAX_VISIBLE_LINES);
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let visible = self.cursor.visible_lines(&self.buffer, area.width).join("\n");

        let mut style = Style::default().fg(Color::Green);
        if !self.focused {
            style = style.add_modifier(Modifier::DIM);
        }
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(ratatui::text::Span::styled(
                "Text",
                Style::default().add_modifier(Modifier::BOLD),
            ));

        frame.render_widget(Paragraph::new(visible).block(block).style(style), area);
        self.render_scrollbar(frame, area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Submit => {
                self.buffer.insert(self.cursor.pos, '\n');
                self.cursor.pos += 1;
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Terminals send CRLF or bare CR for pasted line breaks
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::ContentChanged
            }),
            TuiEvent::WordLeft => {
                let target = prev_word_boundary(&self.buffer, self.cursor.pos);
                (target != self.cursor.pos).then(|| {
                    self.cursor.pos = target;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::WordRight => {
                let target = next_word_boundary(&self.buffer, self.cursor.pos);
                (target != self.cursor.pos).then(|| {
                    self.cursor.pos = target;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::ContentChanged
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_content_width)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_content_width)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CommitText => Some(InputEvent::Commit(self.buffer.clone())),
            _ => None,
        }
    }
}
