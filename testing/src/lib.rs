//! # Todoflow Testing
//!
//! Testing utilities and helpers for the todoflow architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits (deterministic ids)
//! - A recording subscriber for asserting on delivered change events
//! - A recording surface for asserting on view-side row operations
//! - A Given-When-Then harness for reducers
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_app::TodoStore;
//! use todoflow_testing::{RecordingSubscriber, test_environment};
//!
//! #[tokio::test]
//! async fn add_notifies_subscribers() {
//!     let store = TodoStore::with_environment(test_environment());
//!     let subscriber = RecordingSubscriber::new();
//!     let _subscription = store.subscribe(subscriber.callback());
//!
//!     let _ = store.add_todo("Test todo").await;
//!     assert_eq!(subscriber.len(), 1);
//! }
//! ```

pub mod surface_mocks;

/// Mock implementations for deterministic tests.
pub mod mocks {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};

    use todoflow_app::{TodoEnvironment, TodoEvent};
    use todoflow_core::environment::IdGenerator;
    use uuid::Uuid;

    /// Sequential id generator for deterministic tests
    ///
    /// Issues `Uuid::from_u128(1)`, `from_u128(2)`, … so tests can predict
    /// the ids the reducer assigns. Ids are still never reissued.
    ///
    /// # Example
    ///
    /// ```
    /// use todoflow_core::environment::IdGenerator;
    /// use todoflow_testing::mocks::SequentialIds;
    ///
    /// let ids = SequentialIds::new();
    /// assert_eq!(ids.generate(), uuid::Uuid::from_u128(1));
    /// assert_eq!(ids.generate(), uuid::Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Creates a generator starting at id 1
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> Uuid {
            let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
            Uuid::from_u128(u128::from(id))
        }
    }

    /// Creates a todo environment with deterministic sequential ids
    #[must_use]
    pub fn test_environment() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(SequentialIds::new()))
    }

    /// Subscriber that records every delivered change event
    ///
    /// Clones share the same recording, so a test can keep one handle while
    /// giving the store the callback.
    #[derive(Clone, Debug, Default)]
    pub struct RecordingSubscriber {
        events: Arc<Mutex<Vec<TodoEvent>>>,
    }

    impl RecordingSubscriber {
        /// Creates an empty recorder
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Callback to hand to `subscribe`
        #[must_use]
        pub fn callback(&self) -> impl Fn(&TodoEvent) + Send + Sync + 'static {
            let events = Arc::clone(&self.events);
            move |event: &TodoEvent| {
                events
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(event.clone());
            }
        }

        /// All recorded events, in delivery order
        #[must_use]
        pub fn events(&self) -> Vec<TodoEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of recorded events
        #[must_use]
        pub fn len(&self) -> usize {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Whether nothing has been delivered yet
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Discards everything recorded so far
        pub fn clear(&self) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
    }
}

// Re-export commonly used items
pub use mocks::{RecordingSubscriber, SequentialIds, test_environment};
pub use reducer_test::ReducerTest;
pub use surface_mocks::{RecordingSurface, SurfaceCall, SurfaceProbe};
