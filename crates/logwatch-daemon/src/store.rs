//! In-memory feed store.
//!
//! Ids start at 1 and only increase, so `since` can binary-search the
//! (id-ordered) record vector. Nothing here persists: the feed restarts
//! at id 1 with the daemon.

use logwatch_proto::protocol::{now_stamp, LogRecord};
use tokio::sync::RwLock;

#[derive(Debug)]
struct Inner {
    next_id: u64,
    records: Vec<LogRecord>,
}

pub struct LogStore {
    inner: RwLock<Inner>,
}

impl LogStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }

    /// Append a record, assigning the next id and stamping `created_at`.
    pub async fn append(&self, category: &str, message: &str) -> LogRecord {
        let mut inner = self.inner.write().await;
        let record = LogRecord {
            id: inner.next_id,
            category: category.to_string(),
            message: message.to_string(),
            created_at: now_stamp(),
        };
        inner.next_id += 1;
        inner.records.push(record.clone());
        record
    }

    /// Every record with an id greater than `id`, in id order.
    pub async fn since(&self, id: u64) -> Vec<LogRecord> {
        let inner = self.inner.read().await;
        let start = inner.records.partition_point(|r| r.id <= id);
        inner.records[start..].to_vec()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

impl Default for LogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_assigns_increasing_ids_from_one() {
        let store = LogStore::new();
        let a = store.append("AUTH", "first").await;
        let b = store.append("DB", "second").await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(!a.created_at.is_empty());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn since_returns_only_newer_records() {
        let store = LogStore::new();
        for n in 0..5 {
            store.append("CAT", &format!("msg {n}")).await;
        }
        let all = store.since(0).await;
        assert_eq!(all.len(), 5);

        let tail = store.since(3).await;
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].id, 4);
        assert_eq!(tail[1].id, 5);

        assert!(store.since(5).await.is_empty());
        assert!(store.since(99).await.is_empty());
    }
}
