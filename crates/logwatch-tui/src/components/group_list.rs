//! GroupList component — the per-category groups with unread badges and
//! expandable log history.
//!
//! Groups render in lexicographic category order. A closed group is one
//! header row; an open group shows its newest records first, capped for
//! display while the store keeps the full history.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    action::Action,
    app_state::AppState,
    component::Component,
    theme::{
        style_muted, style_selected, style_selected_focused, C_BADGE_UNREAD, C_CATEGORY, C_MUTED,
        C_PRIMARY, C_SECONDARY, C_TIME,
    },
    widgets::pane_chrome::{pane_chrome, Badge},
};

/// Most recent records shown per open group. Display-only cap — the
/// group keeps everything.
const GROUP_DISPLAY_CAP: usize = 50;

pub struct GroupList {
    selected: usize,
    scroll: usize,
}

impl GroupList {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll: 0,
        }
    }

    fn selected_category(&self, state: &AppState) -> Option<String> {
        state
            .session
            .groups()
            .iter()
            .nth(self.selected)
            .map(|g| g.category.clone())
    }

    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Component for GroupList {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }
        let len = state.session.groups().len();
        self.clamp_selection(len);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
            }
            KeyCode::PageUp => {
                self.selected = self.selected.saturating_sub(5);
            }
            KeyCode::PageDown => {
                if len > 0 {
                    self.selected = (self.selected + 5).min(len - 1);
                }
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = len.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(category) = self.selected_category(state) {
                    return vec![Action::ToggleGroup(category)];
                }
            }
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, state: &AppState) {
        let groups = state.session.groups();
        self.clamp_selection(groups.len());

        let unread_total = groups.total_unread();
        let badge_text = format!("{} unread", unread_total);
        let badge = (unread_total > 0).then(|| Badge {
            text: &badge_text,
            color: C_BADGE_UNREAD,
        });

        let block = pane_chrome("groups", focused, badge);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        if groups.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("  no logs yet — polling {}", state.feed_url),
                    style_muted(),
                )),
                inner,
            );
            return;
        }

        let width = inner.width as usize;
        let mut lines: Vec<Line> = Vec::new();
        let mut header_rows: Vec<usize> = Vec::new();

        for (idx, group) in groups.iter().enumerate() {
            let is_selected = idx == self.selected;
            header_rows.push(lines.len());

            let chev = if group.open { "▾" } else { "▸" };
            let mut spans = vec![
                Span::styled(format!(" {} ", chev), Style::default().fg(C_SECONDARY)),
                Span::styled(
                    group.category.clone(),
                    Style::default()
                        .fg(C_CATEGORY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} total", group.logs.len()),
                    Style::default().fg(C_MUTED),
                ),
            ];
            if group.unread > 0 {
                spans.push(Span::styled(
                    format!("  ● {}", group.unread),
                    Style::default()
                        .fg(C_BADGE_UNREAD)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            let mut header = Line::from(spans);
            if is_selected {
                header = header.style(if focused {
                    style_selected_focused()
                } else {
                    style_selected()
                });
            }
            lines.push(header);

            if group.open {
                for record in group.recent(GROUP_DISPLAY_CAP) {
                    let time = record.created_at.as_str();
                    let msg = record.message.lines().next().unwrap_or("");
                    let msg_width = width.saturating_sub(5 + time.width() + 2);
                    lines.push(Line::from(vec![
                        Span::styled(format!("     {} ", time), Style::default().fg(C_TIME)),
                        Span::styled(truncate_to(msg, msg_width), Style::default().fg(C_PRIMARY)),
                    ]));
                }
            }
        }

        // Keep the selected group's header visible.
        let height = inner.height as usize;
        let target = header_rows.get(self.selected).copied().unwrap_or(0);
        if target < self.scroll {
            self.scroll = target;
        } else if target >= self.scroll + height {
            self.scroll = target + 1 - height;
        }
        let max_scroll = lines.len().saturating_sub(height);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let visible: Vec<Line> = lines.into_iter().skip(self.scroll).take(height).collect();
        frame.render_widget(Paragraph::new(visible), inner);
    }
}

/// Truncate to a display width, ending with an ellipsis when cut.
fn truncate_to(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
