//! Console list surface.
//!
//! A line-oriented [`ListSurface`] that renders rows as checkbox-style
//! lines on any writer. It cannot redraw in place, so refreshes and
//! removals print their own lines; that is enough for the demo binary and
//! for asserting on rendered output in tests.

use std::io::{self, Write};

use todoflow_app::{TodoId, TodoItem};

use crate::error::ViewError;
use crate::surface::ListSurface;

/// Row handle for the console surface
///
/// The console keeps no retained widgets; the handle carries the id so the
/// removal line can name what disappeared.
#[derive(Debug, Clone)]
pub struct ConsoleRow {
    id: TodoId,
}

/// Checkbox-style list surface over any writer
pub struct ConsoleSurface<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleSurface<io::Stdout> {
    /// Creates a surface writing to stdout
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleSurface<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleSurface<W> {
    /// Creates a surface writing to the given writer
    pub const fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Consumes the surface, returning the writer
    pub fn into_writer(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) -> Result<(), ViewError> {
        writeln!(self.out, "{line}").map_err(ViewError::surface)
    }
}

const fn mark(todo: &TodoItem) -> &'static str {
    if todo.completed { "[x]" } else { "[ ]" }
}

impl<W: Write> ListSurface for ConsoleSurface<W> {
    type Row = ConsoleRow;

    fn mount_row(&mut self, todo: &TodoItem) -> Result<ConsoleRow, ViewError> {
        self.write_line(&format!("+ {} {}", mark(todo), todo.text))?;
        Ok(ConsoleRow {
            id: todo.id.clone(),
        })
    }

    fn refresh_row(&mut self, _row: &mut ConsoleRow, todo: &TodoItem) -> Result<(), ViewError> {
        self.write_line(&format!("~ {} {}", mark(todo), todo.text))
    }

    fn unmount_row(&mut self, row: ConsoleRow) -> Result<(), ViewError> {
        self.write_line(&format!("- removed {}", row.id))
    }
}
