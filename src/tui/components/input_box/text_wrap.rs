//! Wrapping helpers and geometry constants for the text field.
//!
//! Stateless: nothing here knows about `InputBox` or `CursorState`.

/// Two borders plus one spare column so the cursor can sit after a full line
pub(super) const HORIZONTAL_OVERHEAD: u16 = 3;
/// Top + bottom borders
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Visible text rows inside the field; more content scrolls
pub(super) const MAX_VISIBLE_LINES: u16 = 9;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(inner_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Usable text width for a field `content_width` columns wide. 0 if too narrow.
pub(super) fn inner_width(content_width: u16) -> u16 {
    content_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Wrapped lines of `text`, always ending with an empty line when `text`
/// ends with a newline.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }

    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();

    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    wrapped_lines(text, width).len() as u16
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `pos` (readline `backward-word`).
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }
    boundary
}

/// End of the word after `pos` (readline `forward-word`).
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[pos..].char_indices().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }
    while chars.peek().is_some_and(|&(_, c)| is_word_char(c)) {
        chars.next();
    }

    match chars.peek() {
        Some(&(i, _)) => pos + i,
        None => text.len(),
    }
}
