//! # Unidirectional Core
//!
//! Core traits for building applications on a unidirectional data flow.
//!
//! Every state change goes through the same loop:
//!
//! ```text
//! action creator ──▶ Action ──▶ Store ──▶ Reducer(state, action) ──▶ new State
//!                                 ▲                                      │
//!                                 └──────────── replaces ◀───────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! - **State**: Owned, cloneable domain data for a feature
//! - **Action**: A closed set of intended state changes
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies (often `()`)
//!
//! ## Architecture Principles
//!
//! - Functional core, imperative shell
//! - Unidirectional data flow
//! - Total reducers: unknown actions pass through unchanged
//! - Composition by slicing state, never by sharing it
//!
//! ## Example
//!
//! ```
//! use unidirectional_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &CounterState, action: &CounterAction, _env: &()) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!             CounterAction::Reset => CounterState::default(),
//!         }
//!     }
//! }
//!
//! let next = CounterReducer.reduce(&CounterState::default(), &CounterAction::Increment, &());
//! assert_eq!(next.count, 1);
//! ```

/// Reducer composition utilities
pub mod composition;

/// Action module - the closed vocabulary of state changes
///
/// Actions are plain values. The runtime never inspects their payload; it only
/// asks for a stable [`Action::kind`] tag to label logs and metrics.
pub mod action {
    /// Common behavior of every action type
    ///
    /// Implement it by hand or with `#[derive(Action)]` from
    /// `unidirectional-macros`, which tags each variant with its name in
    /// `SCREAMING_SNAKE_CASE`.
    ///
    /// # Example
    ///
    /// ```
    /// use unidirectional_core::action::Action;
    ///
    /// #[derive(Clone, Debug)]
    /// enum LightAction {
    ///     TurnOn,
    ///     TurnOff,
    /// }
    ///
    /// impl Action for LightAction {
    ///     fn kind(&self) -> &'static str {
    ///         match self {
    ///             Self::TurnOn => "TURN_ON",
    ///             Self::TurnOff => "TURN_OFF",
    ///         }
    ///     }
    /// }
    ///
    /// assert_eq!(LightAction::TurnOn.kind(), "TURN_ON");
    /// ```
    pub trait Action {
        /// Stable tag identifying the variant (e.g. `"ADD_TODO"`)
        fn kind(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`.
///
/// They never mutate their input. Every call builds the next state as a new
/// value, which the store then substitutes for the previous one.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state (or slice of state) this reducer owns
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Contract
    ///
    /// A reducer must be total: for an action it does not handle it returns a
    /// value equal to the prior state. Composition relies on this, since every
    /// reducer in a tree is shown every action.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: The prior state (left untouched)
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The next state
        fn reduce(
            &self,
            state: &Self::State,
            action: &Self::Action,
            env: &Self::Environment,
        ) -> Self::State;
    }

    impl<R: Reducer + ?Sized> Reducer for Box<R> {
        type State = R::State;
        type Action = R::Action;
        type Environment = R::Environment;

        fn reduce(
            &self,
            state: &Self::State,
            action: &Self::Action,
            env: &Self::Environment,
        ) -> Self::State {
            (**self).reduce(state, action, env)
        }
    }
}
