//! Component trait — the interface every focusable panel implements.
//!
//! Components are self-contained: they own their cursor/scroll state and
//! render themselves from the read-only `AppState`. They never mutate the
//! session directly — they return `Action`s and the App applies them.

use crate::action::Action;
use crate::app_state::AppState;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Handle a key event. Only called when this component has focus.
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action>;

    /// Render the component into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState);
}
