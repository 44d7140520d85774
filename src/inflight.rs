use crate::error::{FetchOutcome, WeatherError};
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

type SharedFetch<T> = Shared<BoxFuture<'static, FetchOutcome<T>>>;

/// Coalesces concurrent fetches for the same cache key.
///
/// The first caller spawns the work; everyone arriving while it runs awaits
/// the same task and gets a clone of its outcome. The task unregisters itself
/// when done, so nothing (including failures) outlives the fetch.
pub struct InFlight<T> {
    pending: Arc<Mutex<HashMap<String, SharedFetch<T>>>>,
}

impl<T> Clone for InFlight<T> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<T> Default for InFlight<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InFlight<T>
where
    T: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn run<F>(&self, key: &str, work: F) -> FetchOutcome<T>
    where
        F: Future<Output = FetchOutcome<T>> + Send + 'static,
    {
        let fetch = {
            let mut pending = self.pending.lock();
            match pending.get(key) {
                Some(existing) => {
                    tracing::debug!("Joining in-flight fetch for {}", key);
                    existing.clone()
                }
                None => {
                    let fetch = self.spawn(key.to_string(), work);
                    pending.insert(key.to_string(), fetch.clone());
                    fetch
                }
            }
        };

        fetch.await
    }

    /// Number of fetches currently running.
    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    fn spawn<F>(&self, key: String, work: F) -> SharedFetch<T>
    where
        F: Future<Output = FetchOutcome<T>> + Send + 'static,
    {
        let unregister = Unregister {
            pending: Arc::clone(&self.pending),
            key,
        };
        let handle = tokio::spawn(async move {
            let _unregister = unregister;
            work.await
        });

        async move {
            match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Err(WeatherError::Task(e.to_string())),
            }
        }
        .boxed()
        .shared()
    }
}

/// Drops the key from the table when the fetch task ends, panics included.
/// The registering lock is held by the caller of `spawn`, so this can never
/// run before the entry is inserted.
struct Unregister<T> {
    pending: Arc<Mutex<HashMap<String, SharedFetch<T>>>>,
    key: String,
}

impl<T> Drop for Unregister<T> {
    fn drop(&mut self) {
        self.pending.lock().remove(&self.key);
    }
}
