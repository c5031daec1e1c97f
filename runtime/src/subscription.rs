//! Subscriber registry and subscription handles.
//!
//! The registry keeps subscribers in registration order with list semantics:
//! registering the same callback twice yields two independent registrations,
//! each removable only through its own handle. Duplicate unsubscribe calls,
//! and unsubscribing a registration that was already removed, are safe no-ops.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Callback invoked synchronously with every committed change event.
pub type EventCallback<Ev> = Arc<dyn Fn(&Ev) + Send + Sync>;

/// Lock a registry mutex, recovering from poisoning.
///
/// A panicking subscriber poisons the mutex but leaves the entry list
/// structurally intact, so later callers continue with the inner value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Entries<Ev> {
    entries: Vec<(u64, EventCallback<Ev>)>,
    next_id: u64,
}

/// Registration-ordered subscriber registry.
pub(crate) struct Registry<Ev> {
    inner: Arc<Mutex<Entries<Ev>>>,
}

impl<Ev> Registry<Ev> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Entries {
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Append a callback and hand back the handle for this registration.
    pub(crate) fn register(&self, callback: EventCallback<Ev>) -> Subscription<Ev> {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push((id, callback));

        metrics::gauge!("store.subscribers.active").increment(1.0);
        tracing::trace!(subscription = id, "subscriber registered");

        Subscription {
            registry: Arc::clone(&self.inner),
            id,
        }
    }

    /// Snapshot the callbacks for one delivery pass.
    ///
    /// Taken at the start of each pass so a subscriber unsubscribing itself
    /// or another subscriber mid-delivery neither skips nor double-notifies
    /// the remaining subscribers.
    pub(crate) fn delivery_snapshot(&self) -> Vec<EventCallback<Ev>> {
        lock(&self.inner)
            .entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }

    /// Number of currently registered subscribers.
    pub(crate) fn count(&self) -> usize {
        lock(&self.inner).entries.len()
    }
}

impl<Ev> Clone for Registry<Ev> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Handle for a single subscriber registration.
///
/// Delivery to the registered callback continues until
/// [`Subscription::unsubscribe`] is invoked; dropping the handle leaves the
/// registration active.
pub struct Subscription<Ev> {
    registry: Arc<Mutex<Entries<Ev>>>,
    id: u64,
}

impl<Ev> Subscription<Ev> {
    /// Remove exactly this registration.
    ///
    /// Calling this more than once, or for a registration already removed,
    /// is a safe no-op. Other registrations — including a second
    /// registration of the same callback — are unaffected.
    pub fn unsubscribe(&self) {
        let mut inner = lock(&self.registry);
        let before = inner.entries.len();
        inner.entries.retain(|(id, _)| *id != self.id);

        if inner.entries.len() < before {
            metrics::gauge!("store.subscribers.active").decrement(1.0);
            tracing::trace!(subscription = self.id, "subscriber removed");
        }
    }
}

impl<Ev> fmt::Debug for Subscription<Ev> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
