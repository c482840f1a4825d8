//! # Unidirectional Testing
//!
//! Testing utilities and helpers for the unidirectional state core.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for pure reducers
//! - Assertion helpers for reducer contracts
//! - Replay helpers for action sequences
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use unidirectional_testing::ReducerTest;
//!
//! ReducerTest::new(TodoAppReducer::new())
//!     .with_env(())
//!     .given_state(TodoState::default())
//!     .when_action(add_todo("buy milk"))
//!     .then_state(|state| assert_eq!(state.todos.len(), 1))
//!     .run();
//! ```


pub use reducer_test::{ReducerTest, assertions};

/// Test helpers and utilities
pub mod helpers {
    use unidirectional_core::reducer::Reducer;

    /// Fold a sequence of actions through a reducer
    ///
    /// Returns the state after the last action, i.e. what a store holding
    /// `initial` would contain after receiving `actions` in order.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let state = replay(&reducer, &TodoState::default(), &[add_todo("a"), toggle_todo(0)], &());
    /// assert!(state.todos[0].completed);
    /// ```
    pub fn replay<R: Reducer>(
        reducer: &R,
        initial: &R::State,
        actions: &[R::Action],
        env: &R::Environment,
    ) -> R::State
    where
        R::State: Clone,
    {
        actions
            .iter()
            .fold(initial.clone(), |state, action| reducer.reduce(&state, action, env))
    }

    /// Every intermediate state of a replay, starting with `initial`
    ///
    /// The result has `actions.len() + 1` entries.
    pub fn replay_history<R: Reducer>(
        reducer: &R,
        initial: &R::State,
        actions: &[R::Action],
        env: &R::Environment,
    ) -> Vec<R::State>
    where
        R::State: Clone,
    {
        let mut history = Vec::with_capacity(actions.len() + 1);
        history.push(initial.clone());
        for action in actions {
            let next = history
                .last()
                .map_or_else(|| initial.clone(), |prior| reducer.reduce(prior, action, env));
            history.push(next);
        }
        history
    }

    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Honors `RUST_LOG`; safe to call from every test (only the first call
    /// installs anything).
    pub fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use proptest::collection::vec;
    use proptest::strategy::Strategy;

    /// Sequences of up to `max_len` actions drawn from `action`
    pub fn action_sequence<S>(action: S, max_len: usize) -> impl Strategy<Value = Vec<S::Value>>
    where
        S: Strategy,
    {
        vec(action, 0..=max_len)
    }
}

// Re-export commonly used items
pub use helpers::{init_test_tracing, replay, replay_history};

#[cfg(test)]
mod tests {
    use super::*;
    use unidirectional_core::reducer::Reducer;

    struct SumReducer;

    impl Reducer for SumReducer {
        type State = i64;
        type Action = i64;
        type Environment = ();

        fn reduce(&self, state: &i64, action: &i64, _env: &()) -> i64 {
            state + action
        }
    }

    #[test]
    fn test_replay_folds_in_order() {
        assert_eq!(replay(&SumReducer, &10, &[1, 2, 3], &()), 16);
        assert_eq!(replay(&SumReducer, &10, &[], &()), 10);
    }

    #[test]
    fn test_replay_history_records_every_step() {
        let history = replay_history(&SumReducer, &0, &[5, -2], &());
        assert_eq!(history, vec![0, 5, 3]);
    }

    #[test]
    fn test_init_test_tracing_is_idempotent() {
        init_test_tracing();
        init_test_tracing();
    }
}
