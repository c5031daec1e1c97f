//! Mock surface implementation for view tests.

use std::sync::{Arc, Mutex, PoisonError};

use todoflow_app::{TodoId, TodoItem};
use todoflow_view::{ListSurface, ViewError};

/// One recorded surface operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// A row was created for a task
    Mounted {
        /// Task id
        id: TodoId,
        /// Text at mount time
        text: String,
        /// Completion flag at mount time
        completed: bool,
    },

    /// A mounted row's visual attributes were updated
    Refreshed {
        /// Task id
        id: TodoId,
        /// Text after the refresh
        text: String,
        /// Completion flag after the refresh
        completed: bool,
    },

    /// A mounted row was detached
    Unmounted {
        /// Task id
        id: TodoId,
    },
}

type CallLog = Arc<Mutex<Vec<SurfaceCall>>>;

fn push(log: &CallLog, call: SurfaceCall) {
    log.lock().unwrap_or_else(PoisonError::into_inner).push(call);
}

/// Surface that records every operation instead of rendering
///
/// Created together with its [`SurfaceProbe`]; the surface moves into the
/// view while the probe stays with the test for assertions.
#[derive(Debug)]
pub struct RecordingSurface {
    calls: CallLog,
}

impl RecordingSurface {
    /// Creates a recording surface and the probe observing it
    #[must_use]
    pub fn new() -> (Self, SurfaceProbe) {
        let calls: CallLog = Arc::default();
        (
            Self {
                calls: Arc::clone(&calls),
            },
            SurfaceProbe { calls },
        )
    }
}

impl ListSurface for RecordingSurface {
    type Row = TodoId;

    fn mount_row(&mut self, todo: &TodoItem) -> Result<TodoId, ViewError> {
        push(
            &self.calls,
            SurfaceCall::Mounted {
                id: todo.id.clone(),
                text: todo.text.clone(),
                completed: todo.completed,
            },
        );
        Ok(todo.id.clone())
    }

    fn refresh_row(&mut self, row: &mut TodoId, todo: &TodoItem) -> Result<(), ViewError> {
        debug_assert_eq!(row, &todo.id, "refresh must target the tracked row");
        push(
            &self.calls,
            SurfaceCall::Refreshed {
                id: todo.id.clone(),
                text: todo.text.clone(),
                completed: todo.completed,
            },
        );
        Ok(())
    }

    fn unmount_row(&mut self, row: TodoId) -> Result<(), ViewError> {
        push(&self.calls, SurfaceCall::Unmounted { id: row });
        Ok(())
    }
}

/// Read side of a [`RecordingSurface`]
#[derive(Debug, Clone)]
pub struct SurfaceProbe {
    calls: CallLog,
}

impl SurfaceProbe {
    /// All recorded operations, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded operations
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no operation has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_sees_operations_in_call_order() {
        let (mut surface, probe) = RecordingSurface::new();
        let todo = TodoItem::new(TodoId::new(), "record me".to_string());

        let mut row = match surface.mount_row(&todo) {
            Ok(row) => row,
            Err(err) => unreachable!("recording surface never fails: {err}"),
        };
        let done = todo.toggled();
        let _ = surface.refresh_row(&mut row, &done);
        let _ = surface.unmount_row(row);

        assert_eq!(
            probe.calls(),
            vec![
                SurfaceCall::Mounted {
                    id: todo.id.clone(),
                    text: "record me".to_string(),
                    completed: false,
                },
                SurfaceCall::Refreshed {
                    id: todo.id.clone(),
                    text: "record me".to_string(),
                    completed: true,
                },
                SurfaceCall::Unmounted { id: todo.id },
            ]
        );
    }
}
