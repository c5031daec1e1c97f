//! Rendering-surface contract.

use todoflow_app::TodoItem;

use crate::error::ViewError;

/// Row-management contract implemented by the host UI toolkit
///
/// The view drives a surface exclusively through this create/update/remove
/// triple and assumes nothing about how rows are drawn. A `Row` is an opaque
/// handle to one mounted visual row; the view owns it from `mount_row` until
/// it passes it back to `unmount_row`.
pub trait ListSurface {
    /// Handle to one mounted visual row
    type Row;

    /// Creates and displays a row for `todo`, returning its handle
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Surface`] when the toolkit fails to create the
    /// row.
    fn mount_row(&mut self, todo: &TodoItem) -> Result<Self::Row, ViewError>;

    /// Updates the mutable visual attributes of a mounted row
    ///
    /// Only the completion mark and text change over a row's lifetime; the
    /// row keeps its place in the list.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Surface`] when the toolkit fails to update the
    /// row.
    fn refresh_row(&mut self, row: &mut Self::Row, todo: &TodoItem) -> Result<(), ViewError>;

    /// Detaches and discards a mounted row
    ///
    /// The handle is consumed; a removed row is never mounted again.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Surface`] when the toolkit fails to detach the
    /// row.
    fn unmount_row(&mut self, row: Self::Row) -> Result<(), ViewError>;
}
