//! Demo producer — stands in for an external log-emitting script.

use crate::store::LogStore;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const SAMPLES: &[(&str, &str)] = &[
    ("AUTH.LOGIN", "login failed for user admin"),
    ("AUTH.TOKEN", "token refresh succeeded"),
    ("DB.TIMEOUT", "query exceeded 5s deadline"),
    ("DB.POOL", "connection pool exhausted"),
    ("TEST.FILE.MISSING", "fixture data/users.json not found"),
    ("TEST.ASSERT", "expected 200, got 503"),
    ("NET.DNS", "lookup api.internal timed out"),
    ("CACHE", "evicted 128 stale entries"),
];

pub fn start(store: Arc<LogStore>, interval_secs: u64) -> tokio::task::JoinHandle<()> {
    let period = Duration::from_secs(interval_secs.max(1));
    tokio::spawn(async move {
        info!("simulator emitting a sample record every {:?}", period);
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            let (category, message) = pick_sample();
            let record = store.append(category, message).await;
            debug!(id = record.id, category, "simulated record");
        }
    })
}

fn pick_sample() -> (&'static str, &'static str) {
    SAMPLES[rand::thread_rng().gen_range(0..SAMPLES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_submittable() {
        for (category, message) in SAMPLES {
            assert!(!category.trim().is_empty());
            assert!(!message.trim().is_empty());
        }
    }

    #[test]
    fn pick_sample_stays_in_bounds() {
        for _ in 0..100 {
            let (category, _) = pick_sample();
            assert!(SAMPLES.iter().any(|(c, _)| c == &category));
        }
    }
}
