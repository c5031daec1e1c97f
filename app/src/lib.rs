//! Todo application built on the todoflow architecture.
//!
//! This crate binds the generic store runtime to the todo domain:
//!
//! - Immutable domain model (`TodoId`, `TodoItem`, `TodoState`)
//! - Commands validated by a pure reducer; invalid input degrades to a
//!   defined no-op rather than an error
//! - One change event per committed mutation (`Added`/`Updated`/`Removed`)
//! - `TodoStore`, a facade exposing the domain operations by name
//!
//! # Quick Start
//!
//! ```no_run
//! use todoflow_app::{TodoEvent, TodoStore};
//!
//! # async fn example() {
//! let store = TodoStore::new();
//!
//! let subscription = store.subscribe(|event: &TodoEvent| {
//!     println!("changed: {event:?}");
//! });
//!
//! // Add a todo; the text is trimmed, blank text is a no-op.
//! let event = store.add_todo("  Buy milk  ").await;
//! assert!(event.is_some());
//!
//! // Toggle and remove by id.
//! let id = store.state(|s| s.todos[0].id.clone()).await;
//! let _ = store.toggle_todo(&id).await;
//! let _ = store.remove_todo(&id).await;
//!
//! subscription.unsubscribe();
//! # }
//! ```

pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::TodoStore;
pub use types::{TodoCommand, TodoEvent, TodoId, TodoItem, TodoState};
