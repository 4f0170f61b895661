use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::time::Instant;

use crate::error::{AppError, AppResult};

/// Name a query result is stored and deduplicated under
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "query:{}", self.0)
    }
}

/// Outcome of a fetch, shareable between every waiter of that fetch
type Shared<T> = Result<Arc<T>, Arc<AppError>>;

enum Slot<T> {
    Fresh {
        value: Arc<T>,
        fetched_at: Instant,
    },
    InFlight {
        generation: u64,
        outcome: watch::Receiver<Option<Shared<T>>>,
    },
}

struct Slots<T> {
    next_generation: u64,
    entries: HashMap<QueryKey, Slot<T>>,
}

/// In-process query cache with request coalescing
///
/// A successful result stays fresh for `ttl` and is handed out without
/// touching the backend. While a fetch for a key is running, every other
/// caller for that key waits on the same fetch instead of starting its own.
/// Failures reach all current waiters but are never stored.
///
/// Fetches run on their own task, so a caller that stops waiting (a render
/// deadline, a dropped connection) does not cancel the request.
pub struct QueryCache<T> {
    ttl: Duration,
    slots: Arc<Mutex<Slots<T>>>,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            ttl: self.ttl,
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<T: Send + Sync + 'static> QueryCache<T> {
    /// Creates an empty cache. A zero `ttl` only coalesces concurrent fetches.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Arc::new(Mutex::new(Slots {
                next_generation: 0,
                entries: HashMap::new(),
            })),
        }
    }

    /// Returns the value for `key`, running `fetcher` only when there is
    /// neither a fresh value nor a fetch already in flight.
    pub async fn fetch<F, Fut>(&self, key: &QueryKey, fetcher: F) -> AppResult<Arc<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>> + Send + 'static,
    {
        let mut outcome = {
            let mut slots = self.slots.lock().await;

            let joined = match slots.entries.get(key) {
                Some(Slot::Fresh { value, fetched_at }) if fetched_at.elapsed() < self.ttl => {
                    tracing::debug!(key = %key, "Query cache hit");
                    return Ok(Arc::clone(value));
                }
                // A closed channel means the fetch task died without reporting.
                Some(Slot::InFlight { outcome, .. }) if outcome.has_changed().is_ok() => {
                    tracing::debug!(key = %key, "Joining in-flight query");
                    Some(outcome.clone())
                }
                _ => None,
            };

            match joined {
                Some(outcome) => outcome,
                None => self.start_fetch(&mut slots, key, fetcher()),
            }
        };

        let shared = {
            let received = outcome
                .wait_for(Option::is_some)
                .await
                .map_err(|_| AppError::Internal(format!("{} ended without a result", key)))?;
            Option::clone(&received)
        };

        match shared {
            Some(Ok(value)) => Ok(value),
            Some(Err(err)) => Err(AppError::Query(err)),
            None => Err(AppError::Internal(format!("{} ended without a result", key))),
        }
    }

    /// Registers a new in-flight slot for `key` and spawns the fetch
    fn start_fetch<Fut>(
        &self,
        slots: &mut Slots<T>,
        key: &QueryKey,
        fut: Fut,
    ) -> watch::Receiver<Option<Shared<T>>>
    where
        Fut: Future<Output = AppResult<T>> + Send + 'static,
    {
        slots.next_generation += 1;
        let generation = slots.next_generation;

        let (tx, rx) = watch::channel(None);
        slots.entries.insert(
            key.clone(),
            Slot::InFlight {
                generation,
                outcome: rx.clone(),
            },
        );

        tracing::info!(key = %key, generation, "Starting query fetch");

        let shared_slots = Arc::clone(&self.slots);
        let key = key.clone();
        tokio::spawn(async move {
            let start = Instant::now();
            let result: Shared<T> = fut.await.map(Arc::new).map_err(Arc::new);

            {
                let mut slots = shared_slots.lock().await;
                let current = matches!(
                    slots.entries.get(&key),
                    Some(Slot::InFlight { generation: g, .. }) if *g == generation
                );

                match &result {
                    Ok(value) => {
                        tracing::info!(
                            key = %key,
                            elapsed_ms = start.elapsed().as_millis() as u64,
                            "Query fetch completed"
                        );
                        // Invalidated while in flight: hand the value to the
                        // waiters but don't store it.
                        if current {
                            slots.entries.insert(
                                key.clone(),
                                Slot::Fresh {
                                    value: Arc::clone(value),
                                    fetched_at: Instant::now(),
                                },
                            );
                        }
                    }
                    Err(e) => {
                        tracing::warn!(key = %key, error = %e, "Query fetch failed");
                        if current {
                            slots.entries.remove(&key);
                        }
                    }
                }
            }

            // No receivers left is fine: nobody is waiting any more.
            let _ = tx.send(Some(result));
        });

        rx
    }

    /// Returns the cached value for `key` if it is still fresh
    pub async fn peek(&self, key: &QueryKey) -> Option<Arc<T>> {
        let slots = self.slots.lock().await;
        match slots.entries.get(key) {
            Some(Slot::Fresh { value, fetched_at }) if fetched_at.elapsed() < self.ttl => {
                Some(Arc::clone(value))
            }
            _ => None,
        }
    }

    /// True while a fetch for `key` is running
    pub async fn is_fetching(&self, key: &QueryKey) -> bool {
        let slots = self.slots.lock().await;
        matches!(slots.entries.get(key), Some(Slot::InFlight { .. }))
    }

    /// Drops whatever is stored for `key`; returns whether anything was there.
    ///
    /// A fetch already in flight still completes for its waiters, but its
    /// result is not stored.
    pub async fn invalidate(&self, key: &QueryKey) -> bool {
        let mut slots = self.slots.lock().await;
        let removed = slots.entries.remove(key).is_some();
        if removed {
            tracing::info!(key = %key, "Query invalidated");
        }
        removed
    }
}
