//! # Todoflow Runtime
//!
//! Runtime implementation for the todoflow architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and change-event delivery.
//!
//! ## Core Components
//!
//! - **Store**: owns the current immutable state and runs the reducer
//! - **Subscriptions**: registration-ordered observer registry with
//!   independently removable registrations
//!
//! ## Delivery Contract
//!
//! Every committed mutation produces exactly one change event, delivered
//! synchronously to all registered subscribers in registration order before
//! `send` returns. A subscriber observing an event is therefore guaranteed
//! that [`Store::snapshot`] already reflects the post-mutation state.
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! let subscription = store.subscribe(|event| println!("{event:?}"));
//!
//! // Send a command; the returned event (if any) was already delivered.
//! let event = store.send(Command::DoSomething).await;
//!
//! // Read state
//! let snapshot = store.snapshot().await;
//! subscription.unsubscribe();
//! ```

pub mod store;
pub mod subscription;

pub use store::Store;
pub use subscription::Subscription;
