//! Color palette and style constants for the logwatch TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_ACCENT: Color = Color::Rgb(255, 110, 90);
pub const C_PRIMARY: Color = Color::Rgb(212, 212, 224);
pub const C_SECONDARY: Color = Color::Rgb(118, 118, 140);
pub const C_MUTED: Color = Color::Rgb(74, 74, 90);
pub const C_SELECTION_BG: Color = Color::Rgb(30, 30, 42);
pub const C_PANEL_BORDER: Color = Color::Rgb(42, 42, 54);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(110, 105, 200);
pub const C_FILTER_BG: Color = Color::Rgb(22, 22, 34);
pub const C_FILTER_FG: Color = Color::Rgb(255, 204, 92);
pub const C_TAG: Color = Color::Rgb(92, 150, 210);
pub const C_BADGE_UNREAD: Color = Color::Rgb(255, 95, 95);
pub const C_CATEGORY: Color = Color::Rgb(140, 200, 160);
pub const C_TIME: Color = Color::Rgb(100, 140, 170);
pub const C_TOAST: Color = Color::Rgb(255, 184, 80);
pub const C_CONNECTED: Color = Color::Rgb(84, 196, 124);
pub const C_MODE_NORMAL: Color = Color::Rgb(118, 118, 140);
pub const C_MODE_INSERT: Color = Color::Rgb(255, 204, 92);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_selected_focused() -> Style {
    Style::default()
        .bg(C_SELECTION_BG)
        .fg(C_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn style_selected() -> Style {
    Style::default().bg(C_SELECTION_BG).fg(C_PRIMARY)
}

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}
