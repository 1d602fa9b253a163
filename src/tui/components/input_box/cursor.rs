//! Cursor position and scrolling for the text field.
//!
//! `CursorState` owns the cursor byte offset, the scroll offset and the
//! width seen at the last render. The text itself belongs to `InputBox` and
//! is passed in explicitly.

use super::text_wrap::{
    BORDER_OFFSET, MAX_VISIBLE_LINES, inner_width, wrap_line_count, wrap_options, wrapped_lines,
};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

pub(super) struct CursorState {
    /// Byte offset into the buffer (0..=buffer.len()), always on a char boundary
    pub pos: usize,
    /// First visible wrapped line
    pub scroll_offset: u16,
    /// Field width from the last render, used for vertical movement
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Wrapped line index and display column of the cursor.
    fn line_and_column(&self, buffer: &str, width: u16) -> (u16, u16) {
        let before = &buffer[..self.pos];
        let line = wrap_line_count(before, width).saturating_sub(1);

        // Column from the current logical line. textwrap trims trailing
        // spaces, so wrapped output can't be used directly for the last segment.
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let logical = &before[line_start..];
        let segments = textwrap::wrap(logical, wrap_options(width));
        let mut consumed = 0;
        for seg in segments.iter().take(segments.len().saturating_sub(1)) {
            if let Some(i) = logical[consumed..].find(&seg[..]) {
                consumed += i + seg.len();
            }
        }
        let tail = logical[consumed..].trim_start_matches(' ');
        let column = if segments.len() > 1 { tail } else { logical };

        (line, column.width() as u16)
    }

    /// Which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }
        self.line_and_column(buffer, width).0
    }

    /// Move one wrapped line up (`-1`) or down (`1`), keeping the column
    /// where possible. Returns `false` at the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let line = self.calculate_line(buffer, content_width);
        let total = wrap_line_count(buffer, width);
        let target = if direction < 0 {
            match line.checked_sub(1) {
                Some(t) => t,
                None => return false,
            }
        } else if line + 1 < total {
            line + 1
        } else {
            return false;
        };

        let (_, column) = self.line_and_column(buffer, width);

        // Walk char boundaries until we reach the target line, then the column.
        let mut probe = CursorState {
            pos: 0,
            scroll_offset: 0,
            last_content_width: content_width,
        };
        let mut best = None;
        let boundaries = buffer
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(buffer.len()));
        for offset in boundaries {
            probe.pos = offset;
            let (l, c) = probe.line_and_column(buffer, width);
            if l == target {
                if c <= column || best.is_none() {
                    best = Some(offset);
                }
                if c >= column {
                    break;
                }
            } else if l > target {
                break;
            }
        }

        match best {
            Some(offset) => {
                self.pos = offset;
                true
            }
            None => false,
        }
    }

    /// Keep the cursor inside the visible window.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        if wrap_line_count(buffer, width) <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen `(column, row)` of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let (line, column) = self.line_and_column(buffer, width);
        let visible_line = line.saturating_sub(self.scroll_offset);
        (
            area.x + BORDER_OFFSET + column,
            area.y + BORDER_OFFSET + visible_line,
        )
    }

    /// The wrapped lines currently in view.
    pub fn visible_lines(&self, buffer: &str, content_width: u16) -> Vec<String> {
        let lines = wrapped_lines(buffer, inner_width(content_width));
        let start = (self.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());
        lines[start..end].to_vec()
    }
}
