//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state
//! - **`combine_reducers`**: Run several reducers over the same state/action
//!
//! A root reducer is usually built by scoping each slice reducer onto its
//! field and combining the scoped reducers. Because a scoped reducer only
//! reads and writes its own field, the slices never observe each other.
//!
//! # Examples
//!
//! ```
//! use unidirectional_core::composition::{BoxedReducer, combine_reducers, scope_reducer};
//! use unidirectional_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! enum AppAction {
//!     Increment,
//!     Rename(String),
//! }
//!
//! struct CountReducer;
//! struct NameReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = i32;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, count: &i32, action: &AppAction, _env: &()) -> i32 {
//!         match action {
//!             AppAction::Increment => count + 1,
//!             AppAction::Rename(_) => *count,
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, name: &String, action: &AppAction, _env: &()) -> String {
//!         match action {
//!             AppAction::Rename(new_name) => new_name.clone(),
//!             AppAction::Increment => name.clone(),
//!         }
//!     }
//! }
//!
//! let slices: Vec<BoxedReducer<AppState, AppAction, ()>> = vec![
//!     Box::new(scope_reducer(
//!         CountReducer,
//!         |s: &AppState| &s.count,
//!         |s: &mut AppState, count: i32| s.count = count,
//!     )),
//!     Box::new(scope_reducer(
//!         NameReducer,
//!         |s: &AppState| &s.name,
//!         |s: &mut AppState, name: String| s.name = name,
//!     )),
//! ];
//! let app = combine_reducers(slices);
//!
//! let state = app.reduce(&AppState::default(), &AppAction::Increment, &());
//! let state = app.reduce(&state, &AppAction::Rename("Alice".into()), &());
//! assert_eq!(state, AppState { count: 1, name: "Alice".into() });
//! ```

use crate::reducer::Reducer;

/// Boxed reducer over a shared state, action, and environment
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// The reducers run in order; each one receives the state produced by the
/// previous one. With no reducers the combination is the identity.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: Clone + 'static,
    A: 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: Clone + 'static,
    A: 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: Clone + 'static,
    A: 'static,
    E: 'static,
{
    /// Number of reducers in the combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether the combination holds no reducers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: Clone + 'static,
    A: 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &S, action: &A, env: &E) -> S {
        self.reducers
            .iter()
            .fold(state.clone(), |acc, reducer| reducer.reduce(&acc, action, env))
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// `get_state` borrows the slice out of the parent; `set_state` writes the
/// reduced slice into a copy of the parent. All other fields of the parent are
/// carried over as they were.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (subset of `S`)
/// - `A`: The action type
/// - `E`: The environment type
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<fn(&A, &E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: Clone + 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &S, action: &A, env: &E) -> S {
        let next_slice = self.reducer.reduce((self.get_state)(state), action, env);

        let mut next = state.clone();
        (self.set_state)(&mut next, next_slice);
        next
    }
}
