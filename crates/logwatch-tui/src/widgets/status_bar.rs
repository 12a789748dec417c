//! Status bar — bottom line with mode, feed state, counters, and key
//! hints.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app_state::AppState;
use crate::theme::{C_ACCENT, C_CONNECTED, C_MODE_INSERT, C_MODE_NORMAL, C_MUTED, C_SECONDARY};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Insert,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Normal => C_MODE_NORMAL,
            Self::Insert => C_MODE_INSERT,
        }
    }
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, mode: InputMode, state: &AppState) {
    let conn_span = if state.connected {
        Span::styled("●", Style::default().fg(C_CONNECTED))
    } else {
        Span::styled("○", Style::default().fg(C_ACCENT))
    };

    let groups = state.session.groups();
    let counts = format!(
        "cursor {}  {} groups / {} logs  {} watched",
        state.session.cursor(),
        groups.len(),
        groups.total_records(),
        state.session.filters().len(),
    );

    let last_poll = state
        .last_poll
        .map(|t| format!("last poll {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "waiting for first poll".to_string());

    let left = Line::from(vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default()
                .fg(mode.color())
                .add_modifier(Modifier::BOLD),
        ),
        conn_span,
        Span::styled(" feed  ", Style::default().fg(C_SECONDARY)),
        Span::styled(counts, Style::default().fg(C_SECONDARY)),
        Span::styled(format!("  {}", last_poll), Style::default().fg(C_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(left), area);

    let hints = Line::from(Span::styled(
        "tab panes  / add filter  enter open  q quit ",
        Style::default().fg(C_MUTED),
    ));
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), area);
}
