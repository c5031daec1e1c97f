//! List-view synchronization: tracking entries and incremental updates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use todoflow_app::{TodoEvent, TodoId, TodoItem, TodoState, TodoStore};
use todoflow_runtime::Subscription;

use crate::error::ViewError;
use crate::surface::ListSurface;

/// A list view shared with the store's subscriber callback.
pub type SharedListView<Su> = Arc<Mutex<ListView<Su>>>;

fn lock<Su: ListSurface>(view: &SharedListView<Su>) -> MutexGuard<'_, ListView<Su>> {
    view.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mirrors store state into a surface, one row per task
///
/// The view owns a tracking entry per mounted row, keyed by task id — the
/// only correlation between store state and rows, since removal shifts
/// positions. A row's lifecycle is strictly mount → refresh* → unmount;
/// once unmounted, an id is never mounted again.
pub struct ListView<Su: ListSurface> {
    surface: Su,
    rows: HashMap<TodoId, Su::Row>,
}

impl<Su: ListSurface> ListView<Su> {
    /// Creates a view over the given surface, with nothing tracked yet
    pub fn new(surface: Su) -> Self {
        Self {
            surface,
            rows: HashMap::new(),
        }
    }

    /// Mounts one row per task in the given state
    ///
    /// Called once at attach time to mirror the tasks that existed before
    /// the view subscribed.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ViewError::Surface`] failure; rows mounted
    /// before the failure stay tracked.
    pub fn render_initial(&mut self, state: &TodoState) -> Result<(), ViewError> {
        for todo in &state.todos {
            self.mount(todo)?;
        }
        Ok(())
    }

    /// Applies one change event to the surface
    ///
    /// `Added` mounts a row and records its tracking entry; `Updated`
    /// refreshes the tracked row in place; `Removed` detaches and discards
    /// the entry. Events for ids with no tracking entry (`Updated`,
    /// `Removed`) do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Surface`] when the surface rejects an
    /// operation, and [`ViewError::UnknownEvent`] when the event variant is
    /// not part of the store/view contract.
    pub fn apply(&mut self, event: &TodoEvent) -> Result<(), ViewError> {
        match event {
            TodoEvent::Added { todo } => self.mount(todo)?,
            TodoEvent::Updated { todo } => {
                if let Some(row) = self.rows.get_mut(&todo.id) {
                    self.surface.refresh_row(row, todo)?;
                }
            }
            TodoEvent::Removed { id } => {
                if let Some(row) = self.rows.remove(id) {
                    self.surface.unmount_row(row)?;
                }
            }
            other => return Err(ViewError::UnknownEvent(format!("{other:?}"))),
        }
        Ok(())
    }

    fn mount(&mut self, todo: &TodoItem) -> Result<(), ViewError> {
        let row = self.surface.mount_row(todo)?;
        self.rows.insert(todo.id.clone(), row);
        Ok(())
    }

    /// Number of currently tracked rows
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether a row is tracked for the given id
    #[must_use]
    pub fn is_tracked(&self, id: &TodoId) -> bool {
        self.rows.contains_key(id)
    }

    /// Consumes the view, returning the surface
    pub fn into_surface(self) -> Su {
        self.surface
    }
}

/// Wires a view to a store
///
/// Subscribes first, then mirrors the store's current tasks, so every later
/// mutation reaches the view as exactly one event. Returns the shared view
/// and the subscription handle; the view stays live until the handle's
/// `unsubscribe` is invoked.
///
/// # Errors
///
/// Returns [`ViewError::Surface`] when mounting the initial rows fails.
///
/// # Panics
///
/// The installed subscriber panics if an unrecognized change-event variant
/// is delivered — a store/view contract defect that must not be papered
/// over. Surface failures during delivery are logged instead; the affected
/// row catches up on its next event.
#[allow(clippy::panic)] // unknown variants are a contract defect, not a runtime error
pub async fn attach<Su>(
    store: &TodoStore,
    surface: Su,
) -> Result<(SharedListView<Su>, Subscription<TodoEvent>), ViewError>
where
    Su: ListSurface + Send + 'static,
    Su::Row: Send,
{
    let view = Arc::new(Mutex::new(ListView::new(surface)));

    let handle = Arc::clone(&view);
    let subscription = store.subscribe(move |event: &TodoEvent| {
        match lock(&handle).apply(event) {
            Ok(()) => {}
            Err(err @ ViewError::UnknownEvent(_)) => {
                panic!("change event rejected by list view: {err}");
            }
            Err(err) => {
                tracing::error!(error = %err, "surface failed to apply change event");
            }
        }
    });

    let snapshot = store.snapshot().await;
    lock(&view).render_initial(&snapshot)?;

    Ok((view, subscription))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that refuses every operation, for failure-path tests.
    struct BrokenSurface;

    impl ListSurface for BrokenSurface {
        type Row = ();

        fn mount_row(&mut self, _todo: &TodoItem) -> Result<(), ViewError> {
            Err(ViewError::surface(std::io::Error::other("display gone")))
        }

        fn refresh_row(&mut self, _row: &mut (), _todo: &TodoItem) -> Result<(), ViewError> {
            Err(ViewError::surface(std::io::Error::other("display gone")))
        }

        fn unmount_row(&mut self, _row: ()) -> Result<(), ViewError> {
            Err(ViewError::surface(std::io::Error::other("display gone")))
        }
    }

    #[test]
    fn mount_failure_leaves_nothing_tracked() {
        let mut view = ListView::new(BrokenSurface);
        let todo = TodoItem::new(TodoId::new(), "unmountable".to_string());

        let result = view.apply(&TodoEvent::Added { todo });

        assert!(matches!(result, Err(ViewError::Surface(_))));
        assert_eq!(view.tracked_count(), 0);
    }

    #[test]
    fn events_for_untracked_ids_do_not_touch_the_surface() {
        let mut view = ListView::new(BrokenSurface);
        let todo = TodoItem::new(TodoId::new(), "ghost".to_string());

        // Updated/Removed for an untracked id never reach the surface, so
        // even a broken surface stays silent.
        assert!(view.apply(&TodoEvent::Updated { todo }).is_ok());
        assert!(view.apply(&TodoEvent::Removed { id: TodoId::new() }).is_ok());
    }
}
