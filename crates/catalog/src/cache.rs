use std::sync::{Arc, Mutex};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::CatalogError;
use crate::snapshot::CatalogSnapshot;
use crate::store::CatalogStore;

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<CatalogSnapshot>, CatalogError>>>;

/// Cache state machine. `Loading` holds the shared in-flight handle that
/// every concurrent cold-start caller awaits.
enum CacheState {
    Empty,
    Loading(SharedFetch),
    Ready(Arc<CatalogSnapshot>),
}

struct CacheInner {
    state: CacheState,
    /// Monotonic fetch generation. A completing fetch only commits its
    /// outcome if no newer fetch has replaced it in the meantime.
    generation: u64,
}

/// Single-flight catalog cache.
///
/// Owned by the application's composition root and handed to whoever needs
/// catalog data — there is no hidden global slot. Guarantees:
///
/// - Cold start: the first caller begins one store fetch; every caller that
///   arrives while it is in flight awaits the same shared handle, so k
///   concurrent callers produce exactly one outbound fetch and all k observe
///   the identical resolved (or failed) outcome.
/// - Warm path: once populated, `get` returns the shared snapshot without
///   touching the store until `force_refresh`.
/// - Failure never poisons the cache: the slot resets to empty and the next
///   `get` retries.
/// - No cancellation: a started fetch always resolves or rejects and clears
///   the in-flight slot, so an abandoned request can never block a future
///   caller.
#[derive(Clone)]
pub struct CatalogCache {
    store: Arc<dyn CatalogStore>,
    inner: Arc<Mutex<CacheInner>>,
}

impl CatalogCache {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            inner: Arc::new(Mutex::new(CacheInner {
                state: CacheState::Empty,
                generation: 0,
            })),
        }
    }

    /// Current snapshot, fetching on first use.
    pub async fn get(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let fetch = {
            let mut inner = self.lock();
            if let CacheState::Ready(snapshot) = &inner.state {
                tracing::debug!(ingredients = snapshot.len(), "catalog cache warm hit");
                return Ok(Arc::clone(snapshot));
            }
            if let CacheState::Loading(fetch) = &inner.state {
                fetch.clone()
            } else {
                self.begin_fetch(&mut inner)
            }
        };
        fetch.await
    }

    /// Bypasses the warm snapshot and any in-flight fetch, starts a new
    /// fetch, and commits its result over whatever was cached.
    pub async fn force_refresh(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let fetch = {
            let mut inner = self.lock();
            self.begin_fetch(&mut inner)
        };
        fetch.await
    }

    /// True once a snapshot is committed and readable without a fetch.
    pub fn is_warm(&self) -> bool {
        matches!(self.lock().state, CacheState::Ready(_))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Starts a fetch and installs it as the in-flight slot. Must be called
    /// with the state lock held; the returned handle is awaited outside it.
    fn begin_fetch(&self, inner: &mut CacheInner) -> SharedFetch {
        inner.generation += 1;
        let generation = inner.generation;
        let store = Arc::clone(&self.store);
        let slot = Arc::clone(&self.inner);

        tracing::info!(generation, "catalog fetch started");
        let fetch = async move {
            let result = store.fetch_catalog().await.map(Arc::new);

            let mut inner = slot
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            // A force-refresh may have superseded this fetch while it was in
            // flight; only the newest fetch owns the slot.
            if inner.generation == generation {
                match &result {
                    Ok(snapshot) => {
                        tracing::info!(
                            generation,
                            ingredients = snapshot.len(),
                            "catalog fetch committed"
                        );
                        inner.state = CacheState::Ready(Arc::clone(snapshot));
                    }
                    Err(err) => {
                        tracing::warn!(generation, error = %err, "catalog fetch failed");
                        inner.state = CacheState::Empty;
                    }
                }
            }
            result
        }
        .boxed()
        .shared();

        inner.state = CacheState::Loading(fetch.clone());
        fetch
    }
}
