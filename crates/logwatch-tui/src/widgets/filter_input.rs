//! FilterInput — wraps tui-input for the add-filter line.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::theme::{C_FILTER_BG, C_FILTER_FG, C_MUTED};

pub enum InputEvent {
    /// Enter on a non-empty line — the trimmed text to add. The line
    /// clears and stays active so several tags can be added in a row.
    Submitted(String),
    /// Input deactivated without submitting.
    Cancelled,
    Edited,
}

pub struct FilterInput {
    input: Input,
    active: bool,
    placeholder: String,
}

impl FilterInput {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            active: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle a key event while active.
    ///
    /// Esc behaviour:
    ///   - with text: clear the line, stay active
    ///   - already empty: deactivate
    pub fn handle_key(&mut self, key: KeyEvent) -> InputEvent {
        match key.code {
            KeyCode::Enter => {
                let text = self.input.value().trim().to_string();
                self.input = Input::default();
                if text.is_empty() {
                    InputEvent::Edited
                } else {
                    InputEvent::Submitted(text)
                }
            }
            KeyCode::Esc => {
                if self.input.value().is_empty() {
                    self.active = false;
                    InputEvent::Cancelled
                } else {
                    self.input = Input::default();
                    InputEvent::Edited
                }
            }
            _ => {
                self.input
                    .handle_event(&ratatui::crossterm::event::Event::Key(key));
                InputEvent::Edited
            }
        }
    }

    /// Render the input line into `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let scroll = self
            .input
            .visual_scroll(area.width.saturating_sub(4) as usize);
        let value = self.input.value();
        let display = if value.is_empty() {
            Span::styled(
                format!("+ {}", self.placeholder),
                Style::default().fg(C_MUTED),
            )
        } else {
            Span::styled(
                format!("+ {}", &value[scroll..]),
                Style::default().fg(C_FILTER_FG),
            )
        };

        let paragraph =
            Paragraph::new(Line::from(vec![display])).style(Style::default().bg(C_FILTER_BG));
        frame.render_widget(paragraph, area);

        if self.active && !value.is_empty() {
            let cursor_x = area.x + 2 + (self.input.visual_cursor() - scroll) as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width - 1), area.y));
        }
    }
}
