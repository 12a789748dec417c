//! FilterPanel — the ordered watch-filter tags plus the add-filter line.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::Action,
    app_state::AppState,
    component::Component,
    theme::{style_muted, C_SELECTION_BG, C_TAG},
    widgets::filter_input::{FilterInput, InputEvent},
    widgets::pane_chrome::pane_chrome,
};

pub struct FilterPanel {
    selected: usize,
    input: FilterInput,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self {
            selected: 0,
            input: FilterInput::new("watch a category substring, enter to add"),
        }
    }

    /// Activate the add-filter line (also reachable via the global `/`).
    pub fn open_input(&mut self) {
        self.input.activate();
    }

    pub fn is_editing(&self) -> bool {
        self.input.is_active()
    }

    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Component for FilterPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        if self.input.is_active() {
            return match self.input.handle_key(key) {
                InputEvent::Submitted(text) => vec![Action::AddFilter(text)],
                InputEvent::Cancelled | InputEvent::Edited => vec![],
            };
        }

        let len = state.session.filters().len();
        self.clamp_selection(len);

        match key.code {
            KeyCode::Char('/') | KeyCode::Char('a') => {
                self.input.activate();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                if let Some(filter) = state.session.filters().get(self.selected) {
                    return vec![Action::RemoveFilter(filter.to_string())];
                }
            }
            KeyCode::Char('C') => {
                return vec![Action::ClearFilters];
            }
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let filters = state.session.filters();
        self.clamp_selection(filters.len());

        let block = pane_chrome("watch filters", focused, None);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let tags_area = Rect { height: 1, ..inner };
        if filters.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    " no watch filters — add one to enable notifications",
                    style_muted(),
                )),
                tags_area,
            );
        } else {
            let mut spans: Vec<Span> = vec![Span::raw(" ")];
            for (i, filter) in filters.iter().enumerate() {
                let mut style = Style::default().fg(C_TAG);
                if focused && i == self.selected && !self.input.is_active() {
                    style = style.bg(C_SELECTION_BG).add_modifier(Modifier::BOLD);
                }
                spans.push(Span::styled(format!(" {} × ", filter), style));
                spans.push(Span::raw(" "));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), tags_area);
        }

        if inner.height < 2 {
            return;
        }
        let input_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        if self.input.is_active() {
            self.input.draw(frame, input_area);
        } else {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    " / add   x remove   C clear all",
                    style_muted(),
                )),
                input_area,
            );
        }
    }
}
