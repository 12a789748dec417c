use serde::{Deserialize, Serialize};

/// Category assigned to records that arrive without one.
pub const UNIDENTIFIED_CATEGORY: &str = "UNIDENTIFIED";

/// A fully-populated log record, as stored and displayed.
///
/// `id` is unique and assigned by the feed in increasing order.
/// `created_at` is an opaque display string; only the daemon interprets
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: u64,
    pub category: String,
    pub message: String,
    pub created_at: String,
}

/// The wire shape of a record: everything but the id may be missing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLogRecord {
    pub id: u64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RawLogRecord {
    /// Fill in defaults for missing fields. Total — a record with an id
    /// always normalizes, so one sparse row can't sink a batch.
    pub fn normalize(self) -> LogRecord {
        LogRecord {
            id: self.id,
            category: self
                .category
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNIDENTIFIED_CATEGORY.to_string()),
            message: self.message.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_default(),
        }
    }
}

/// Producer POST body for `/internal/log`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSubmission {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

impl LogSubmission {
    /// Stored category: `category`, or `category.code` when a code is given.
    pub fn full_category(&self) -> String {
        let category = self.category.trim();
        let code = self.code.trim();
        if code.is_empty() {
            category.to_string()
        } else {
            format!("{category}.{code}")
        }
    }
}

/// Validate a feed response body.
///
/// Returns the normalized batch only for a well-formed JSON array of
/// records. Anything else — an error object, a non-array value, a row
/// without an id — yields `None` and the caller drops the whole payload;
/// the next poll retries naturally.
pub fn parse_feed_payload(value: serde_json::Value) -> Option<Vec<LogRecord>> {
    if !value.is_array() {
        return None;
    }
    match serde_json::from_value::<Vec<RawLogRecord>>(value) {
        Ok(raw) => Some(raw.into_iter().map(RawLogRecord::normalize).collect()),
        Err(err) => {
            tracing::debug!("malformed feed payload discarded: {err}");
            None
        }
    }
}

/// Timestamp for newly accepted records: UTC, RFC 3339, whole seconds.
pub fn now_stamp() -> String {
    chrono::Utc::now()
        .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
