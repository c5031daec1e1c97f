//! Reducer logic for the todo domain.
//!
//! The reducer is pure and infallible: it validates a command against the
//! current state and either constructs the complete replacement state plus
//! its single change event, or returns `None` for the defined no-op cases
//! (blank text, unknown id). Callers can rely on the silent-no-op policy;
//! it is part of the contract, not error swallowing.

use std::sync::Arc;

use todoflow_core::environment::{IdGenerator, UuidIds};
use todoflow_core::reducer::{Reducer, Transition};

use crate::types::{TodoCommand, TodoEvent, TodoId, TodoItem, TodoState};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Generator for fresh todo ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::new(Arc::new(UuidIds))
    }
}

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add(
        state: &TodoState,
        text: &str,
        env: &TodoEnvironment,
    ) -> Option<Transition<TodoState, TodoEvent>> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("ignoring todo with blank text");
            return None;
        }

        let todo = TodoItem::new(TodoId::from_uuid(env.ids.generate()), text.to_owned());
        let mut todos = state.todos.clone();
        todos.push(todo.clone());

        tracing::debug!(id = %todo.id, "todo added");
        Some(Transition::new(
            TodoState { todos },
            TodoEvent::Added { todo },
        ))
    }

    fn toggle(state: &TodoState, id: &TodoId) -> Option<Transition<TodoState, TodoEvent>> {
        let position = state.position(id)?;
        let updated = state.todos[position].toggled();

        let mut todos = state.todos.clone();
        todos[position] = updated.clone();

        tracing::debug!(id = %updated.id, completed = updated.completed, "todo toggled");
        Some(Transition::new(
            TodoState { todos },
            TodoEvent::Updated { todo: updated },
        ))
    }

    fn remove(state: &TodoState, id: &TodoId) -> Option<Transition<TodoState, TodoEvent>> {
        state.position(id)?;
        let todos = state
            .todos
            .iter()
            .filter(|t| &t.id != id)
            .cloned()
            .collect();

        tracing::debug!(%id, "todo removed");
        Some(Transition::new(
            TodoState { todos },
            TodoEvent::Removed { id: id.clone() },
        ))
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Command = TodoCommand;
    type Event = TodoEvent;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &TodoState,
        command: TodoCommand,
        env: &TodoEnvironment,
    ) -> Option<Transition<TodoState, TodoEvent>> {
        match command {
            TodoCommand::Add { text } => Self::add(state, &text, env),
            TodoCommand::Toggle { id } => Self::toggle(state, &id),
            TodoCommand::Remove { id } => Self::remove(state, &id),
        }
    }
}
