//! Store runtime coordinating reducer execution and event delivery.

use std::sync::Arc;

use todoflow_core::reducer::{Reducer, Transition};
use tokio::sync::RwLock;

use crate::subscription::{Registry, Subscription};

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (an `Arc` snapshot behind an `RwLock`, swapped per mutation)
/// 2. Reducer (mutation logic)
/// 3. Environment (injected dependencies)
/// 4. Subscriber registry and synchronous event delivery
///
/// State is treated as immutable: each committed mutation constructs a new
/// state value and swaps the shared `Arc`, so snapshots handed out earlier
/// are never mutated. The store is cheaply cloneable; clones share state and
/// subscribers.
///
/// # Example
///
/// ```ignore
/// let store = Store::new(TodoState::new(), TodoReducer::new(), environment);
///
/// let subscription = store.subscribe(|event| println!("{event:?}"));
/// let event = store.send(TodoCommand::add("Buy milk")).await;
/// assert!(event.is_some());
/// ```
pub struct Store<R: Reducer> {
    state: Arc<RwLock<Arc<R::State>>>,
    reducer: Arc<R>,
    environment: Arc<R::Environment>,
    subscribers: Registry<R::Event>,
}

impl<R: Reducer> Store<R> {
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R, environment: R::Environment) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial_state))),
            reducer: Arc::new(reducer),
            environment: Arc::new(environment),
            subscribers: Registry::new(),
        }
    }

    /// Send a command to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Runs the reducer with (state, command, environment)
    /// 3. On a transition, swaps in the replacement state and delivers the
    ///    event to every subscriber, in registration order, before returning
    ///
    /// A command the reducer rejects (`None`) is a silent no-op: no state
    /// change, no delivery, `None` returned. `send` never fails, whatever
    /// the command.
    ///
    /// Delivery happens while the state lock is held, which makes delivery
    /// order equal commit order under concurrent senders. Subscriber
    /// callbacks must therefore be non-blocking and must not call back into
    /// the store's async operations; `subscribe`/`unsubscribe` from inside a
    /// callback are safe.
    #[tracing::instrument(skip(self, command), name = "store_send")]
    pub async fn send(&self, command: R::Command) -> Option<R::Event> {
        tracing::debug!("processing command");
        metrics::counter!("store.commands.total").increment(1);

        let mut state = self.state.write().await;
        tracing::trace!("acquired write lock on state");

        let Some(Transition { next, event }) =
            self.reducer.reduce(&state, command, &self.environment)
        else {
            tracing::debug!("command was a defined no-op");
            metrics::counter!("store.commands.noop").increment(1);
            return None;
        };

        *state = Arc::new(next);
        metrics::counter!("store.events.committed").increment(1);

        let listeners = self.subscribers.delivery_snapshot();
        tracing::trace!(subscribers = listeners.len(), "delivering change event");
        for listener in &listeners {
            listener(&event);
        }
        drop(state);

        Some(event)
    }

    /// Immutable snapshot of the current state
    ///
    /// No side effects. The snapshot is shared, not copied; it stays valid
    /// and unchanged across later mutations.
    pub async fn snapshot(&self) -> Arc<R::State> {
        Arc::clone(&*self.state.read().await)
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released
    /// promptly:
    ///
    /// ```ignore
    /// let open = store.state(|s| s.count() - s.completed_count()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Register a callback invoked with every future change event
    ///
    /// List semantics: every call is an independent registration, even for
    /// an identical callback, and each registration is removed only through
    /// its own [`Subscription`] handle. Delivery continues until the handle's
    /// `unsubscribe` is invoked; dropping the handle does not unsubscribe.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<R::Event>
    where
        F: Fn(&R::Event) + Send + Sync + 'static,
    {
        self.subscribers.register(Arc::new(callback))
    }

    /// Number of currently registered subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.count()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            environment: Arc::clone(&self.environment),
            subscribers: self.subscribers.clone(),
        }
    }
}
