//! Store facade for the todo domain.
//!
//! `TodoStore` binds the generic store runtime to the todo reducer and
//! exposes the domain operations by name. It is a thin translation layer:
//! every operation builds the corresponding command and sends it.

use std::sync::Arc;

use todoflow_runtime::{Store, Subscription};

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoCommand, TodoEvent, TodoId, TodoState};

/// Store for the todo application
///
/// Cheaply cloneable; clones share state and subscribers. All mutating
/// operations are infallible: blank text and unknown ids are defined
/// no-ops that change nothing and notify nobody.
#[derive(Clone)]
pub struct TodoStore {
    inner: Store<TodoReducer>,
}

impl TodoStore {
    /// Creates an empty store with the production environment
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(TodoEnvironment::default())
    }

    /// Creates an empty store with the given environment
    #[must_use]
    pub fn with_environment(environment: TodoEnvironment) -> Self {
        Self::with_state(TodoState::new(), environment)
    }

    /// Creates a store seeded with existing state
    #[must_use]
    pub fn with_state(initial_state: TodoState, environment: TodoEnvironment) -> Self {
        Self {
            inner: Store::new(initial_state, TodoReducer::new(), environment),
        }
    }

    /// Adds a todo with the given text
    ///
    /// The text is trimmed; if nothing remains the call is a no-op.
    /// Otherwise the new todo is appended with a fresh id, `completed`
    /// false, and the delivered [`TodoEvent::Added`] is returned.
    pub async fn add_todo(&self, text: impl Into<String>) -> Option<TodoEvent> {
        self.inner.send(TodoCommand::add(text)).await
    }

    /// Inverts the completion flag of the todo with the given id
    ///
    /// Unknown ids are a no-op. On success the delivered
    /// [`TodoEvent::Updated`] carries the replacement item.
    pub async fn toggle_todo(&self, id: &TodoId) -> Option<TodoEvent> {
        self.inner.send(TodoCommand::toggle(id.clone())).await
    }

    /// Removes the todo with the given id
    ///
    /// Unknown ids are a no-op; remaining todos keep their relative order.
    pub async fn remove_todo(&self, id: &TodoId) -> Option<TodoEvent> {
        self.inner.send(TodoCommand::remove(id.clone())).await
    }

    /// Sends a raw command
    ///
    /// Equivalent to the named operations; useful when commands arrive
    /// already constructed (queues, tests).
    pub async fn send(&self, command: TodoCommand) -> Option<TodoEvent> {
        self.inner.send(command).await
    }

    /// Registers a callback invoked with every future change event
    ///
    /// See [`Store::subscribe`] for the registration semantics: every call
    /// is an independent registration removed only via its own handle.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<TodoEvent>
    where
        F: Fn(&TodoEvent) + Send + Sync + 'static,
    {
        self.inner.subscribe(callback)
    }

    /// Immutable snapshot of the current state
    pub async fn snapshot(&self) -> Arc<TodoState> {
        self.inner.snapshot().await
    }

    /// Reads current state via a closure
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodoState) -> T,
    {
        self.inner.state(f).await
    }

    /// Number of currently registered subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
