use crate::core::state::{Form, Stage};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{InputBox, StatusLine, Tone};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Screen regions of the form.
pub struct FormLayout {
    pub title: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Heading at row 2, text field from row 6, prompt at row 20, all inset
/// two columns.
pub fn form_layout(area: Rect) -> FormLayout {
    use Constraint::{Length, Min};

    let inner = area.inner(Margin::new(2, 0));
    let [_, title, _, input, _, status, _] = Layout::vertical([
        Length(2),
        Length(1),
        Length(3),
        Length(InputBox::height()),
        Length(3),
        Length(1),
        Min(0),
    ])
    .areas(inner);

    FormLayout {
        title,
        input,
        status,
    }
}

pub fn draw_form(frame: &mut Frame, form: &Form, tui: &mut TuiState) {
    let layout = form_layout(frame.area());

    tui.title_bar.render(frame, layout.title);

    tui.input_box.focused = form.is_editing();
    tui.input_box.render(frame, layout.input);

    let tone = match form.stage {
        Stage::EmptyNotice => Tone::Warning,
        _ => Tone::Normal,
    };
    StatusLine {
        message: &form.status_message,
        tone,
    }
    .render(frame, layout.status);
}
