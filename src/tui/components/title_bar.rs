//! # TitleBar Component
//!
//! The form heading: what to do, and how to get out.
//!
//! Stateless. Everything it shows arrives as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Enter a micro blog post", "Ctrl+C to quit");
//! title_bar.render(frame, area);
//! ```
//!
//! The hint is dropped first when the terminal is too narrow for both.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub struct TitleBar {
    pub title: String,
    pub hint: String,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hint: hint.into(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        let needed = self.title.width() + 3 + self.hint.width();
        if !self.hint.is_empty() && needed <= area.width as usize {
            spans.push(Span::styled(
                format!(" | {}", self.hint),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
