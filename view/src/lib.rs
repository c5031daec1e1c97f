//! View layer for the todo application.
//!
//! The view mirrors store state into a visual list and keeps it in sync by
//! applying change events incrementally. It talks to the rendering toolkit
//! exclusively through the [`ListSurface`] create/update/remove contract and
//! correlates rows to tasks only by id, never by position.
//!
//! Wiring is one call:
//!
//! ```no_run
//! use todoflow_app::TodoStore;
//! use todoflow_view::{ConsoleSurface, attach};
//!
//! # async fn example() -> Result<(), todoflow_view::ViewError> {
//! let store = TodoStore::new();
//! let (_view, subscription) = attach(&store, ConsoleSurface::new()).await?;
//!
//! let _ = store.add_todo("Rendered as it happens").await;
//! subscription.unsubscribe();
//! # Ok(())
//! # }
//! ```

pub mod console;
pub mod list_view;
pub mod surface;

/// Error types for the view layer
pub mod error {
    use thiserror::Error;

    /// Errors that can occur while synchronizing the list view
    #[derive(Debug, Error)]
    pub enum ViewError {
        /// A surface operation (mount/refresh/unmount) failed.
        ///
        /// Surface failures are a toolkit concern (for the console surface,
        /// plain I/O errors); the affected row may be out of sync until the
        /// next event for its id.
        #[error("surface operation failed: {0}")]
        Surface(#[source] Box<dyn std::error::Error + Send + Sync>),

        /// An unrecognized change-event variant reached the view.
        ///
        /// This indicates a defect in the store/view contract, not a runtime
        /// condition to recover from; handling of the event is aborted.
        #[error("unrecognized change event: {0}")]
        UnknownEvent(String),
    }

    impl ViewError {
        /// Wraps a toolkit error as a surface failure
        pub fn surface(err: impl std::error::Error + Send + Sync + 'static) -> Self {
            Self::Surface(Box::new(err))
        }
    }
}

pub use console::ConsoleSurface;
pub use error::ViewError;
pub use list_view::{ListView, SharedListView, attach};
pub use surface::ListSurface;
