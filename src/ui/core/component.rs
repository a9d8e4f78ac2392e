use crate::sync::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A panel of the terminal UI.
///
/// Keys come in, actions go out; components never call the controller
/// directly.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Consume the actions this component owns and hand back the rest.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
