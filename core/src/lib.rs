//! # Todoflow Core
//!
//! Core traits and types for the todoflow architecture.
//!
//! This crate provides the fundamental abstractions for building a
//! unidirectional-data-flow application: a pure reducer that turns commands
//! into committed state transitions, and environment traits for the few
//! dependencies reducers need injected.
//!
//! ## Core Concepts
//!
//! - **State**: the authoritative, immutable value a store currently holds
//! - **Command**: a request to change state (user intent)
//! - **Event**: the description of a committed change, broadcast to observers
//! - **Reducer**: pure function `(State, Command, Environment) → Option<Transition>`
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: command → transition → event → observers
//! - Immutable state replacement: a transition carries a complete new state
//!   value; previously observed states are never mutated
//! - Exactly one event per committed transition, zero per no-op
//! - Dependency injection via Environment

/// Reducer module - the core trait for state-transition logic
///
/// Reducers contain all mutation logic. They are deterministic, synchronous,
/// and infallible: a command that cannot be applied (empty input, unknown id)
/// is a defined no-op, expressed as `None`.
pub mod reducer {
    /// A committed state transition.
    ///
    /// Carries the complete replacement state together with the single event
    /// describing the change. The previous state value is left untouched, so
    /// snapshots handed out before the transition stay valid.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Transition<S, Ev> {
        /// The complete state value replacing the current one.
        pub next: S,
        /// The change event to deliver to subscribers, exactly once.
        pub event: Ev,
    }

    impl<S, Ev> Transition<S, Ev> {
        /// Creates a transition from a replacement state and its event.
        #[must_use]
        pub const fn new(next: S, event: Ev) -> Self {
            Self { next, event }
        }
    }

    /// The Reducer trait - core abstraction for mutation logic
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Command = TodoCommand;
    ///     type Event = TodoEvent;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &TodoState,
    ///         command: TodoCommand,
    ///         env: &TodoEnvironment,
    ///     ) -> Option<Transition<TodoState, TodoEvent>> {
    ///         // Validation and state construction go here
    ///         None
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The command type this reducer processes
        type Command;

        /// The change-event type committed transitions produce
        type Event;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce a command against the current state.
        ///
        /// Returns `Some(Transition)` with the complete replacement state and
        /// exactly one event, or `None` when the command is a defined no-op.
        /// The input state is only read; reducers never mutate it and never
        /// fail, whatever the input.
        fn reduce(
            &self,
            state: &Self::State,
            command: Self::Command,
            env: &Self::Environment,
        ) -> Option<Transition<Self::State, Self::Event>>;
    }
}

/// Environment module - dependency injection traits
///
/// All external dependencies reducers rely on are abstracted behind traits
/// and injected via the Environment parameter, keeping reducers deterministic
/// under test.
pub mod environment {
    use uuid::Uuid;

    /// `IdGenerator` trait - abstracts identifier generation for testability
    ///
    /// Identifiers produced through this trait are opaque and unique for the
    /// lifetime of the process; an id handed out once is never reissued.
    ///
    /// # Examples
    ///
    /// ```
    /// use todoflow_core::environment::{IdGenerator, UuidIds};
    ///
    /// let ids = UuidIds;
    /// assert_ne!(ids.generate(), ids.generate());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Generate a fresh, never-before-issued identifier
        fn generate(&self) -> Uuid;
    }

    /// Production generator backed by random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidIds;

    impl IdGenerator for UuidIds {
        fn generate(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
