// ── Per-pass request coalescing ──
//
// One slot per cache key. The first caller for a key runs the fetch; every
// caller that arrives while it is in flight, or afterwards, awaits the same
// slot and receives a clone of the same result. Slots are write-once:
// nothing is re-fetched for the lifetime of the cache unless invalidated.

use std::future::Future;
use std::sync::Arc;

use dashmap::{DashMap, DashSet};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::trace;

use crate::error::FetchError;

type Outcome = Result<Value, FetchError>;
type Slot = Arc<OnceCell<Outcome>>;

/// Keyed, write-once store of fetch outcomes for one render pass.
#[derive(Debug, Default)]
pub struct FetchCache {
    slots: DashMap<String, Slot>,
    decode_reported: DashSet<String>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `key`, running `fetch` only if no caller has claimed it yet.
    ///
    /// Failures are stored like successes, so callers sharing a key all see
    /// the same error.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
    {
        // Clone the slot out so no map shard lock is held across the await.
        let slot = Arc::clone(self.slots.entry(key.to_owned()).or_default().value());

        slot.get_or_init(|| {
            trace!(key, "cache miss, issuing request");
            fetch()
        })
        .await
        .clone()
    }

    /// Resolved outcome for `key`, if its fetch has completed.
    pub fn peek(&self, key: &str) -> Option<Outcome> {
        self.slots.get(key).and_then(|slot| slot.get().cloned())
    }

    /// Returns `true` if `key` has been claimed (in flight or resolved).
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Returns `true` for the first caller to report a decode failure of
    /// `key`'s outcome. The outcome is shared, so the failure is too.
    pub fn claim_decode_report(&self, key: &str) -> bool {
        self.decode_reported.insert(key.to_owned())
    }

    /// Drop the slot for `key` so the next caller fetches again.
    ///
    /// Callers already awaiting the old slot still receive its result.
    pub fn invalidate(&self, key: &str) -> bool {
        self.decode_reported.remove(key);
        self.slots.remove(key).is_some()
    }

    pub fn clear(&self) {
        self.decode_reported.clear();
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Claimed keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.slots.iter().map(|e| e.key().clone()).collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::error::FetchErrorKind;

    async fn slow_fetch(calls: &AtomicUsize, value: Value) -> Outcome {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(value)
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_fetch() {
        let cache = FetchCache::new();
        let calls = AtomicUsize::new(0);

        let (a, b, c) = tokio::join!(
            cache.get_or_fetch("lodges-all", || slow_fetch(&calls, json!([1]))),
            cache.get_or_fetch("lodges-all", || slow_fetch(&calls, json!([2]))),
            cache.get_or_fetch("lodges-all", || slow_fetch(&calls, json!([3]))),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.unwrap(), json!([1]));
        assert_eq!(b.unwrap(), json!([1]));
        assert_eq!(c.unwrap(), json!([1]));
    }

    #[tokio::test]
    async fn resolved_keys_are_not_refetched() {
        let cache = FetchCache::new();
        let calls = AtomicUsize::new(0);

        cache
            .get_or_fetch("hero", || slow_fetch(&calls, json!({ "images": [] })))
            .await
            .unwrap();
        let again = cache
            .get_or_fetch("hero", || slow_fetch(&calls, json!(null)))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(again, json!({ "images": [] }));
        assert_eq!(cache.peek("hero").unwrap().unwrap(), again);
    }

    #[tokio::test]
    async fn distinct_keys_fetch_independently() {
        let cache = FetchCache::new();
        let calls = AtomicUsize::new(0);

        let (main, all) = tokio::join!(
            cache.get_or_fetch("gallery-position=main", || slow_fetch(&calls, json!(["m"]))),
            cache.get_or_fetch("gallery-all", || slow_fetch(&calls, json!(["a"]))),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(main.unwrap(), json!(["m"]));
        assert_eq!(all.unwrap(), json!(["a"]));
        assert_eq!(cache.keys(), vec!["gallery-all", "gallery-position=main"]);
    }

    #[tokio::test]
    async fn failures_are_shared() {
        let cache = FetchCache::new();
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let failing = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::new(FetchErrorKind::Http, 500, None))
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch("news", failing),
            cache.get_or_fetch("news", failing),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.unwrap_err().status_code, 500);
        assert_eq!(b.unwrap_err().status_code, 500);
    }

    #[tokio::test]
    async fn invalidate_allows_refetch() {
        let cache = FetchCache::new();
        let calls = AtomicUsize::new(0);

        cache
            .get_or_fetch("statistics", || slow_fetch(&calls, json!([])))
            .await
            .unwrap();
        assert!(cache.contains("statistics"));
        assert!(cache.invalidate("statistics"));
        assert!(!cache.contains("statistics"));
        assert!(!cache.invalidate("statistics"));

        cache
            .get_or_fetch("statistics", || slow_fetch(&calls, json!([])))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn decode_reports_are_claimed_once_per_key() {
        let cache = FetchCache::new();
        assert!(cache.claim_decode_report("lodges-all"));
        assert!(!cache.claim_decode_report("lodges-all"));
        assert!(cache.claim_decode_report("news"));

        cache.invalidate("lodges-all");
        assert!(cache.claim_decode_report("lodges-all"));
    }
}
