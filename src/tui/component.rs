use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the form that draws itself.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. `render` takes `&mut self` so a component
/// can refresh presentation state (scroll offset, cached width) while it
/// draws.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal events.
pub trait EventHandler {
    /// The high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
