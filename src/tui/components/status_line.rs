//! # StatusLine Component
//!
//! The single prompt line under the text field ("Editing Text: ...",
//! "Press Enter to save ...", "Please fill in ..."). Bold, like every
//! prompt the form shows; the blank-text notice is drawn in yellow.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Warning,
}

pub struct StatusLine<'a> {
    pub message: &'a str,
    pub tone: Tone,
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = match self.tone {
            Tone::Normal => Style::default(),
            Tone::Warning => Style::default().fg(Color::Yellow),
        }
        .add_modifier(Modifier::BOLD);

        frame.render_widget(Paragraph::new(self.message).style(style), area);
    }
}
