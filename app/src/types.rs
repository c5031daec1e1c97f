//! Domain types for the todo application.
//!
//! The model is deliberately small: a task item with a stable identity, its
//! trimmed text, and a completion flag; an application state holding the
//! items in insertion order; and the command/event pair the store speaks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo item
///
/// Assigned at creation and immutable for the item's lifetime; it is the
/// sole correlation key between store state and any view-side tracking.
/// Ids are never reused after removal and never derived from list position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// Items are value types: the store never mutates one in place, it replaces
/// the whole item with a new value carrying the same `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the todo, non-empty and trimmed
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, open todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Returns a replacement item with `completed` inverted
    ///
    /// `id` and `text` are carried over unchanged.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            id: self.id.clone(),
            text: self.text.clone(),
            completed: !self.completed,
        }
    }
}

/// State of the todo list
///
/// Items are kept in insertion order and are not reindexed on removal.
/// Invariant: `id` values are unique within the sequence. The state is a
/// value type; every mutation constructs a new `TodoState`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos, in insertion order
    pub todos: Vec<TodoItem>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Creates a state seeded with existing todos
    ///
    /// Callers are responsible for the ids-unique invariant; states built
    /// through the store always satisfy it.
    #[must_use]
    pub fn with_todos(todos: Vec<TodoItem>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<Uuid> = todos.iter().map(|t| *t.id.as_uuid()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|pair| pair[0] != pair[1])
            },
            "todo ids must be unique"
        );
        Self { todos }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| &t.id == id)
    }

    /// Returns the position of a todo in the sequence, by id
    #[must_use]
    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|t| &t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.position(id).is_some()
    }
}

/// Commands accepted by the todo store
///
/// Each command either commits exactly one change or is a defined no-op
/// (blank text, unknown id); commands never fail.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TodoCommand {
    /// Add a new todo with the given text (trimmed before use)
    Add {
        /// Raw text; leading/trailing whitespace is stripped
        text: String,
    },

    /// Invert the completion flag of an existing todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Remove an existing todo
    Remove {
        /// Todo to remove
        id: TodoId,
    },
}

impl TodoCommand {
    /// `Add` command from anything string-like
    pub fn add(text: impl Into<String>) -> Self {
        Self::Add { text: text.into() }
    }

    /// `Toggle` command for the given id
    #[must_use]
    pub const fn toggle(id: TodoId) -> Self {
        Self::Toggle { id }
    }

    /// `Remove` command for the given id
    #[must_use]
    pub const fn remove(id: TodoId) -> Self {
        Self::Remove { id }
    }
}

/// Change events describing committed mutations
///
/// Exactly one event is delivered per successful mutation, after the new
/// state is committed and before the mutating call returns.
///
/// The enum is `non_exhaustive`: downstream consumers must carry a wildcard
/// arm, and an event reaching that arm indicates a store/view contract
/// defect, not a runtime condition to recover from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TodoEvent {
    /// A todo was appended to the end of the sequence
    Added {
        /// The newly created todo
        todo: TodoItem,
    },

    /// A todo was replaced in place (same id, completion inverted)
    Updated {
        /// The replacement todo
        todo: TodoItem,
    },

    /// A todo was removed; remaining items keep their relative order
    Removed {
        /// Id of the removed todo
        id: TodoId,
    },
}
