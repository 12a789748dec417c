//! TailSession — the engine object owning the cursor, the watch filters,
//! and the group store.
//!
//! Everything here mutates on the app's single logical thread of control:
//! the poll path ingests batches, key handlers edit filters and open
//! flags, and the renderer reads a consistent snapshot in between. No
//! locking, no hidden globals.

use crate::filters::FilterSet;
use crate::groups::GroupStore;
use logwatch_proto::protocol::{LogRecord, UNIDENTIFIED_CATEGORY};

/// What one ingest pass did: the categories it touched (in first-arrival
/// order) and the single category, if any, to announce.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    pub touched: Vec<String>,
    pub notify: Option<String>,
}

pub struct TailSession {
    cursor: u64,
    filters: FilterSet,
    groups: GroupStore,
}

impl TailSession {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            filters: FilterSet::new(),
            groups: GroupStore::new(),
        }
    }

    /// Highest record id merged so far; 0 means nothing fetched yet.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterSet {
        &mut self.filters
    }

    pub fn groups(&self) -> &GroupStore {
        &self.groups
    }

    /// Merge a polled batch, in arrival order.
    ///
    /// The batch is taken exactly as the feed returned it: ids are not
    /// re-sorted or deduplicated, and the cursor lands on the last id
    /// processed. A record counts as unread — and becomes the notify
    /// candidate — only when its category is watched and its group is
    /// closed; an open group is being read, so new matches stay visible
    /// but unflagged. Later matches overwrite the candidate, so one batch
    /// yields at most one notification, for its most recent match.
    pub fn ingest(&mut self, batch: Vec<LogRecord>) -> IngestOutcome {
        let mut outcome = IngestOutcome::default();

        for record in batch {
            self.cursor = record.id;

            let category = if record.category.is_empty() {
                UNIDENTIFIED_CATEGORY.to_string()
            } else {
                record.category.clone()
            };

            let watched = self.filters.matches(&category);

            let group = self.groups.entry(&category);
            group.logs.push(LogRecord {
                category: category.clone(),
                ..record
            });

            if watched && !group.open {
                group.unread += 1;
                outcome.notify = Some(category.clone());
            }

            if !outcome.touched.iter().any(|c| c == &category) {
                outcome.touched.push(category);
            }
        }

        outcome
    }

    /// Flip a group open/closed; opening clears its unread count as part
    /// of the same operation.
    pub fn toggle_open(&mut self, category: &str) {
        self.groups.toggle_open(category);
    }
}

impl Default for TailSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u64, category: &str, message: &str) -> LogRecord {
        LogRecord {
            id,
            category: category.to_string(),
            message: message.to_string(),
            created_at: "2026-08-06T18:00:00Z".to_string(),
        }
    }

    #[test]
    fn no_filters_creates_group_without_flagging() {
        let mut session = TailSession::new();
        let outcome = session.ingest(vec![rec(1, "AUTH", "fail")]);

        let group = session.groups().get("AUTH").unwrap();
        assert_eq!(group.unread, 0);
        assert_eq!(group.logs.len(), 1);
        assert_eq!(outcome.notify, None);
        assert_eq!(outcome.touched, vec!["AUTH"]);
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn substring_match_counts_and_notifies() {
        let mut session = TailSession::new();
        session.filters_mut().add("auth");

        let outcome = session.ingest(vec![rec(2, "AUTH-SVC", "x")]);

        assert_eq!(session.groups().get("AUTH-SVC").unwrap().unread, 1);
        assert_eq!(outcome.notify.as_deref(), Some("AUTH-SVC"));
    }

    #[test]
    fn open_group_suppresses_unread_and_notify() {
        let mut session = TailSession::new();
        session.filters_mut().add("auth");
        session.ingest(vec![rec(1, "AUTH-SVC", "first")]);
        session.toggle_open("AUTH-SVC");

        let outcome = session.ingest(vec![rec(3, "AUTH-SVC", "y")]);

        let group = session.groups().get("AUTH-SVC").unwrap();
        assert!(group.open);
        assert_eq!(group.unread, 0);
        assert_eq!(group.logs.len(), 2);
        assert_eq!(outcome.notify, None);
    }

    #[test]
    fn out_of_order_ids_are_kept_as_delivered() {
        let mut session = TailSession::new();
        let outcome = session.ingest(vec![rec(5, "X", "a"), rec(4, "Y", "b")]);

        // Cursor follows the last record processed, not the max.
        assert_eq!(session.cursor(), 4);
        assert_eq!(session.groups().get("X").unwrap().logs.len(), 1);
        assert_eq!(session.groups().get("Y").unwrap().logs.len(), 1);
        assert_eq!(outcome.touched, vec!["X", "Y"]);
    }

    #[test]
    fn last_match_in_batch_wins_the_notification() {
        let mut session = TailSession::new();
        session.filters_mut().add("a");
        session.filters_mut().add("b");

        let outcome = session.ingest(vec![rec(1, "A", "one"), rec(2, "B", "two")]);

        assert_eq!(outcome.notify.as_deref(), Some("B"));
        assert_eq!(session.groups().get("A").unwrap().unread, 1);
        assert_eq!(session.groups().get("B").unwrap().unread, 1);
    }

    #[test]
    fn cursor_tracks_ids_across_batches() {
        let mut session = TailSession::new();
        session.ingest(vec![rec(1, "A", ""), rec(2, "A", "")]);
        session.ingest(vec![rec(3, "B", ""), rec(7, "B", "")]);
        assert_eq!(session.cursor(), 7);
    }

    #[test]
    fn empty_category_lands_in_sentinel_group() {
        let mut session = TailSession::new();
        session.ingest(vec![rec(1, "", "orphan")]);

        let group = session.groups().get(UNIDENTIFIED_CATEGORY).unwrap();
        assert_eq!(group.logs.len(), 1);
        assert_eq!(group.logs[0].category, UNIDENTIFIED_CATEGORY);
    }

    #[test]
    fn unread_accumulates_then_toggle_clears_atomically() {
        let mut session = TailSession::new();
        session.filters_mut().add("db");
        session.ingest(vec![rec(1, "DB", "a"), rec(2, "DB", "b"), rec(3, "DB", "c")]);
        assert_eq!(session.groups().get("DB").unwrap().unread, 3);

        session.toggle_open("DB");
        let group = session.groups().get("DB").unwrap();
        assert!(group.open);
        assert_eq!(group.unread, 0);
    }

    #[test]
    fn removing_all_filters_stops_flagging() {
        let mut session = TailSession::new();
        session.filters_mut().add("auth");
        session.ingest(vec![rec(1, "AUTH", "a")]);
        session.filters_mut().clear();

        let outcome = session.ingest(vec![rec(2, "AUTH", "b")]);
        assert_eq!(outcome.notify, None);
        assert_eq!(session.groups().get("AUTH").unwrap().unread, 1);
    }
}
