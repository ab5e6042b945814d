//! Single-slot read-through cache for the attendee name listing.
//!
//! Expiry is lazy: staleness is decided at read time by comparing the
//! injected monotonic clock against the population instant. There is no
//! sweeper.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::clock::Clock;

/// How long a populated listing stays fresh unless configured otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Observable state of the slot at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Fresh,
    Expired,
}

#[derive(Debug, Clone)]
struct CachedNames {
    names: Vec<String>,
    populated_at: Instant,
}

#[derive(Debug, Default)]
struct Slot {
    entry: Option<CachedNames>,
    /// Bumped on every invalidation. A populate that began under an older
    /// generation must not store its result.
    generation: u64,
}

/// Cache holding the most recent attendee name listing.
pub struct NameCache {
    clock: Arc<dyn Clock>,
    ttl: Duration,
    slot: RwLock<Slot>,
}

impl NameCache {
    /// Creates an empty cache.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            ttl,
            slot: RwLock::new(Slot::default()),
        }
    }

    fn state_of(&self, entry: Option<&CachedNames>) -> CacheState {
        match entry {
            None => CacheState::Empty,
            Some(cached)
                if self.clock.now().saturating_duration_since(cached.populated_at) < self.ttl =>
            {
                CacheState::Fresh
            }
            Some(_) => CacheState::Expired,
        }
    }

    /// Current state of the slot.
    pub async fn state(&self) -> CacheState {
        let slot = self.slot.read().await;
        self.state_of(slot.entry.as_ref())
    }

    /// Returns the cached names if they are still fresh.
    pub async fn get(&self) -> Option<Vec<String>> {
        let slot = self.slot.read().await;
        match (self.state_of(slot.entry.as_ref()), slot.entry.as_ref()) {
            (CacheState::Fresh, Some(cached)) => Some(cached.names.clone()),
            _ => None,
        }
    }

    /// Returns the cached names, calling `fetch` to repopulate on a miss.
    ///
    /// A failed fetch leaves the slot as it was and hands the error back.
    pub async fn get_or_populate<F, Fut, E>(&self, fetch: F) -> Result<Vec<String>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<String>, E>>,
    {
        let generation = {
            let slot = self.slot.read().await;
            if let (CacheState::Fresh, Some(cached)) =
                (self.state_of(slot.entry.as_ref()), slot.entry.as_ref())
            {
                tracing::trace!(count = cached.names.len(), "Cache hit for attendee names");
                return Ok(cached.names.clone());
            }
            slot.generation
        };

        tracing::trace!("Cache miss for attendee names");
        let names = fetch().await?;

        let mut slot = self.slot.write().await;
        if slot.generation == generation {
            slot.entry = Some(CachedNames {
                names: names.clone(),
                populated_at: self.clock.now(),
            });
        } else {
            tracing::debug!("Attendee names invalidated during fetch, not caching result");
        }

        Ok(names)
    }

    /// Drops the cached listing so the next read goes to the store.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        slot.entry = None;
        slot.generation = slot.generation.wrapping_add(1);
        tracing::trace!(generation = slot.generation, "Attendee name cache invalidated");
    }
}
