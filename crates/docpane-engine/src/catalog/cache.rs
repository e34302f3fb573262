use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use super::CatalogEntry;

/// Source of "now" for expiry decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

type Stored = (Arc<[CatalogEntry]>, Instant);

/// Time-boxed slot holding the last successful catalog listing.
///
/// Value and timestamp are replaced together; readers never see one without
/// the other.
pub struct CatalogCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<Stored>>,
}

impl CatalogCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            slot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The stored entries, if younger than the TTL.
    pub fn get(&self) -> Option<Arc<[CatalogEntry]>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        let (entries, stored_at) = slot.as_ref()?;
        let age = self.clock.now().saturating_duration_since(*stored_at);
        (age < self.ttl).then(|| Arc::clone(entries))
    }

    pub fn store(&self, entries: Arc<[CatalogEntry]>) {
        let now = self.clock.now();
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some((entries, now));
    }

    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }
}
