//! Single-flight behavior of the catalog cache under concurrency.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use barmatch::{builtin_catalog, CatalogCache, CatalogError, CatalogSnapshot, CatalogStore};

/// Store that counts outbound fetches and holds each one open long enough
/// for callers to pile up.
struct SlowCountingStore {
    fetches: AtomicUsize,
}

impl SlowCountingStore {
    fn new() -> Self {
        Self {
            fetches: AtomicUsize::new(0),
        }
    }

    fn count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogStore for SlowCountingStore {
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(30)).await;
        Ok(builtin_catalog())
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn k_concurrent_cold_starts_trigger_exactly_one_fetch() {
    let store = Arc::new(SlowCountingStore::new());
    let cache = CatalogCache::new(store.clone());

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.get().await })
        })
        .collect();

    let mut snapshots = Vec::with_capacity(handles.len());
    for handle in handles {
        snapshots.push(handle.await.expect("join").expect("get"));
    }

    assert_eq!(store.count(), 1, "cold-start callers must share one fetch");
    for snapshot in &snapshots[1..] {
        assert!(
            Arc::ptr_eq(&snapshots[0], snapshot),
            "every caller observes the identical snapshot"
        );
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn warm_reads_after_the_burst_stay_free() {
    let store = Arc::new(SlowCountingStore::new());
    let cache = CatalogCache::new(store.clone());

    let _ = cache.get().await.expect("cold get");
    for _ in 0..10 {
        let _ = cache.get().await.expect("warm get");
    }

    assert_eq!(store.count(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn force_refresh_is_a_second_fetch_for_everyone_after() {
    let store = Arc::new(SlowCountingStore::new());
    let cache = CatalogCache::new(store.clone());

    let first = cache.get().await.expect("cold get");
    let refreshed = cache.force_refresh().await.expect("refresh");
    let warm = cache.get().await.expect("warm get");

    assert_eq!(store.count(), 2);
    assert!(!Arc::ptr_eq(&first, &refreshed));
    assert!(Arc::ptr_eq(&refreshed, &warm));
}
