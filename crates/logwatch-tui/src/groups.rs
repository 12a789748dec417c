//! GroupStore — per-category state of record: unread counts, log buffers,
//! open/closed flags.

use logwatch_proto::protocol::LogRecord;
use std::collections::BTreeMap;

/// State for one category. Created closed and empty on the first record;
/// the log buffer only grows for the life of the session.
#[derive(Debug, Clone)]
pub struct Group {
    pub category: String,
    pub unread: u64,
    pub logs: Vec<LogRecord>,
    pub open: bool,
}

impl Group {
    fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            unread: 0,
            logs: Vec::new(),
            open: false,
        }
    }

    /// Newest-first view of the last `cap` records. Display only — the
    /// full buffer stays intact.
    pub fn recent(&self, cap: usize) -> impl Iterator<Item = &LogRecord> {
        self.logs.iter().rev().take(cap)
    }
}

/// All groups, keyed by category. The BTreeMap keeps iteration in the
/// lexicographic order the group list renders in.
#[derive(Debug, Clone, Default)]
pub struct GroupStore {
    groups: BTreeMap<String, Group>,
}

impl GroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a group, creating it on first sight of the category.
    pub fn entry(&mut self, category: &str) -> &mut Group {
        self.groups
            .entry(category.to_string())
            .or_insert_with(|| Group::new(category))
    }

    pub fn get(&self, category: &str) -> Option<&Group> {
        self.groups.get(category)
    }

    /// Flip a group open/closed. Opening resets unread in the same step,
    /// so a render never sees an open group with a stale badge.
    pub fn toggle_open(&mut self, category: &str) {
        if let Some(group) = self.groups.get_mut(category) {
            group.open = !group.open;
            if group.open {
                group.unread = 0;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.groups.values().map(|g| g.logs.len()).sum()
    }

    pub fn total_unread(&self) -> u64 {
        self.groups.values().map(|g| g.unread).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_start_closed_and_empty() {
        let mut store = GroupStore::new();
        let group = store.entry("AUTH");
        assert!(!group.open);
        assert_eq!(group.unread, 0);
        assert!(group.logs.is_empty());
    }

    #[test]
    fn toggle_open_clears_unread_in_one_step() {
        let mut store = GroupStore::new();
        store.entry("AUTH").unread = 3;

        store.toggle_open("AUTH");
        let group = store.get("AUTH").unwrap();
        assert!(group.open);
        assert_eq!(group.unread, 0);

        // Closing again leaves unread alone.
        store.toggle_open("AUTH");
        let group = store.get("AUTH").unwrap();
        assert!(!group.open);
        assert_eq!(group.unread, 0);
    }

    #[test]
    fn toggle_unknown_category_is_noop() {
        let mut store = GroupStore::new();
        store.toggle_open("NOPE");
        assert!(store.is_empty());
    }

    #[test]
    fn iteration_is_lexicographic() {
        let mut store = GroupStore::new();
        store.entry("DB");
        store.entry("AUTH");
        store.entry("CACHE");
        let order: Vec<&str> = store.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, vec!["AUTH", "CACHE", "DB"]);
    }

    #[test]
    fn recent_is_newest_first_and_capped() {
        let mut store = GroupStore::new();
        let group = store.entry("X");
        for id in 1..=5 {
            group.logs.push(LogRecord {
                id,
                category: "X".into(),
                message: format!("m{id}"),
                created_at: String::new(),
            });
        }
        let shown: Vec<u64> = group.recent(3).map(|r| r.id).collect();
        assert_eq!(shown, vec![5, 4, 3]);
        assert_eq!(group.logs.len(), 5);
    }
}
