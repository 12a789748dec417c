//! PollEngine — periodic incremental fetch with an explicit Idle/Fetching
//! state machine.
//!
//! One fetch may be outstanding at a time: a tick that lands while a
//! fetch is in flight is dropped, so two responses can never race the
//! cursor. The fetch runs on a background task and reports back through
//! the app's message channel; the session is only touched on the main
//! loop.

use crate::app::AppMessage;
use logwatch_proto::protocol::{parse_feed_payload, LogRecord};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Fixed poll period. The interval's first tick completes immediately,
/// which doubles as the initial fetch at startup.
pub const POLL_INTERVAL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Fetching,
}

pub struct PollEngine {
    client: reqwest::Client,
    base_url: String,
    state: PollState,
}

impl PollEngine {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            state: PollState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == PollState::Idle
    }

    /// Enter Fetching. Refused while a fetch is already outstanding.
    fn begin(&mut self) -> bool {
        if self.state == PollState::Fetching {
            return false;
        }
        self.state = PollState::Fetching;
        true
    }

    /// Back to Idle once the in-flight result has been handled.
    pub fn complete(&mut self) {
        self.state = PollState::Idle;
    }

    fn feed_url(&self, cursor: u64) -> String {
        format!("{}/api/logs?since={}", self.base_url, cursor)
    }

    /// Kick off a fetch for records newer than `cursor`. The result
    /// arrives as an `AppMessage::Batch`; transport errors and malformed
    /// payloads are reported as a discarded batch (`None`).
    pub fn spawn_fetch(&mut self, cursor: u64, tx: mpsc::Sender<AppMessage>) {
        if !self.begin() {
            debug!("poll tick skipped: fetch already in flight");
            return;
        }

        let client = self.client.clone();
        let url = self.feed_url(cursor);
        tokio::spawn(async move {
            let batch = match fetch_batch(&client, &url).await {
                Ok(batch) => Some(batch),
                Err(err) => {
                    debug!("poll failed, batch discarded: {err:#}");
                    None
                }
            };
            let _ = tx.send(AppMessage::Batch(batch)).await;
        });
    }
}

async fn fetch_batch(client: &reqwest::Client, url: &str) -> anyhow::Result<Vec<LogRecord>> {
    let payload: serde_json::Value = client.get(url).send().await?.json().await?;
    parse_feed_payload(payload).ok_or_else(|| anyhow::anyhow!("feed payload is not a log array"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_overlapping_fetches() {
        let mut engine = PollEngine::new("http://127.0.0.1:8791");
        assert!(engine.is_idle());
        assert!(engine.begin());
        assert!(!engine.begin());
        engine.complete();
        assert!(engine.begin());
    }

    #[test]
    fn feed_url_carries_the_cursor() {
        let engine = PollEngine::new("http://127.0.0.1:8791/");
        assert_eq!(
            engine.feed_url(42),
            "http://127.0.0.1:8791/api/logs?since=42"
        );
        assert_eq!(engine.feed_url(0), "http://127.0.0.1:8791/api/logs?since=0");
    }
}
