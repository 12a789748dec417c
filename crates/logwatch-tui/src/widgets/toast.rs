//! Toast — the transient watch notification.
//!
//! At most one signal is visible at a time. A new `notify` replaces
//! whatever is pending and restarts the full display window, so the
//! newest category always gets the whole duration.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::theme::C_TOAST;

/// How long a signal stays up without being replaced.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

struct Signal {
    category: String,
    expires: Instant,
}

#[derive(Default)]
pub struct Toast {
    signal: Option<Signal>,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `category`, replacing any pending signal and its timer.
    pub fn notify(&mut self, category: impl Into<String>) {
        self.notify_for(category, TOAST_DURATION);
    }

    fn notify_for(&mut self, category: impl Into<String>, duration: Duration) {
        self.signal = Some(Signal {
            category: category.into(),
            expires: Instant::now() + duration,
        });
    }

    /// Drop the signal once its window has passed. Returns whether the
    /// display changed. Call on every UI tick.
    pub fn tick(&mut self) -> bool {
        match &self.signal {
            Some(signal) if signal.expires <= Instant::now() => {
                self.signal = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.signal.as_ref().map(|s| s.category.as_str())
    }

    /// Render in the top-right corner of `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let Some(category) = self.current() else {
            return;
        };
        let text = format!(" ⚑ {} ", category);
        let w = (text.chars().count() as u16).min(area.width);
        let x = area.x + area.width.saturating_sub(w + 1);
        let toast_area = Rect {
            x,
            y: area.y + 1,
            width: w,
            height: 1,
        };
        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(C_TOAST).add_modifier(Modifier::BOLD),
            ))),
            toast_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_shows_the_category() {
        let mut toast = Toast::new();
        assert_eq!(toast.current(), None);
        toast.notify("AUTH-SVC");
        assert_eq!(toast.current(), Some("AUTH-SVC"));
    }

    #[test]
    fn newest_signal_replaces_pending() {
        let mut toast = Toast::new();
        toast.notify("A");
        toast.notify("B");
        assert_eq!(toast.current(), Some("B"));
    }

    #[test]
    fn fresh_signal_survives_tick() {
        let mut toast = Toast::new();
        toast.notify("AUTH");
        assert!(!toast.tick());
        assert_eq!(toast.current(), Some("AUTH"));
    }

    #[test]
    fn expired_signal_is_dismissed() {
        let mut toast = Toast::new();
        toast.notify_for("AUTH", Duration::ZERO);
        assert!(toast.tick());
        assert_eq!(toast.current(), None);
        // Nothing pending: further ticks report no change.
        assert!(!toast.tick());
    }

    #[test]
    fn replacement_rearms_the_timer() {
        let mut toast = Toast::new();
        toast.notify_for("A", Duration::ZERO);
        toast.notify("B");
        assert!(!toast.tick());
        assert_eq!(toast.current(), Some("B"));
    }
}
