//! AppState — shared read-only data passed to components during
//! render/event handling.
//!
//! Components read this; only the App event loop writes to it.

use crate::session::TailSession;
use chrono::{DateTime, Local};

pub struct AppState {
    /// The engine state: cursor, watch filters, groups.
    pub session: TailSession,
    /// Whether the last poll reached the feed and parsed.
    pub connected: bool,
    /// When the last successful poll completed.
    pub last_poll: Option<DateTime<Local>>,
    /// Feed base URL, for the empty-state hint.
    pub feed_url: String,
}

impl AppState {
    pub fn new(feed_url: String) -> Self {
        Self {
            session: TailSession::new(),
            connected: false,
            last_poll: None,
            feed_url,
        }
    }
}
