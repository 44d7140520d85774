use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// Process-local key/value store with a per-entry deadline.
///
/// Reads never remove anything: an entry past its deadline is reported as
/// absent but stays in the map until [`TtlCache::purge_expired`] runs, usually
/// from the task started by [`TtlCache::spawn_sweeper`].
pub struct TtlCache<V> {
    store: Arc<RwLock<HashMap<String, CacheEntry<V>>>>,
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V> Default for TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let store = self.store.read().await;
        store
            .get(key)
            .filter(|entry| !entry.is_expired(Instant::now()))
            .map(|entry| entry.value.clone())
    }

    /// Inserts or replaces `key`, expiring `ttl` from now. A zero `ttl` only
    /// drops any previous value, so every stored entry starts out live.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let mut store = self.store.write().await;
        if ttl.is_zero() {
            store.remove(&key);
            return;
        }
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        store.insert(key, entry);
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Physically removes every expired entry and returns how many went.
    pub async fn purge_expired(&self) -> usize {
        let mut store = self.store.write().await;
        let now = Instant::now();
        let before = store.len();
        store.retain(|_, entry| !entry.is_expired(now));
        before - store.len()
    }

    /// Runs [`TtlCache::purge_expired`] every `interval` until the handle is aborted.
    /// Shorter intervals, zero included, are raised to [`MIN_SWEEP_INTERVAL`].
    pub fn spawn_sweeper(&self, name: &'static str, interval: Duration) -> JoinHandle<()> {
        let interval = if interval < MIN_SWEEP_INTERVAL {
            tracing::warn!(
                "Sweep interval {:?} for {} cache is too short, using {:?}",
                interval,
                name,
                MIN_SWEEP_INTERVAL
            );
            MIN_SWEEP_INTERVAL
        } else {
            interval
        };
        let cache = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            loop {
                ticker.tick().await;
                let removed = cache.purge_expired().await;
                if removed > 0 {
                    tracing::debug!("Swept {} expired entries from {} cache", removed, name);
                }
            }
        })
    }
}
