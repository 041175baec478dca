use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::model::booking::BookingKind;

/// Per-resource serialization for booking mutations.
///
/// The registry hands out one async mutex per `(kind, resource_id)` key.
/// Holding the guard across the conflict re-check and the insert makes
/// the two atomic with respect to that resource: a concurrent request for
/// the same vehicle, provider, or seat waits, then re-reads state the
/// first writer already committed and fails with `ResourceUnavailable`
/// instead of double-booking.
///
/// Requests for different resources never contend. Lock entries are tiny
/// and kept for the process lifetime; the registry is bounded by the
/// number of distinct resources ever booked through this process.
#[derive(Default)]
pub struct ResourceLocks {
    inner: Mutex<HashMap<(BookingKind, i32), Arc<AsyncMutex<()>>>>,
}

impl ResourceLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for one resource, waiting if another booking
    /// mutation currently holds it.
    pub async fn acquire(&self, kind: BookingKind, resource_id: i32) -> OwnedMutexGuard<()> {
        let mutex = {
            let mut registry = self.inner.lock().expect("resource lock registry poisoned");
            registry
                .entry((kind, resource_id))
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        mutex.lock_owned().await
    }
}
