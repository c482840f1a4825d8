//! Reducer logic for the todo application.
//!
//! Two slice reducers, each owning one field of [`TodoState`], and a root
//! reducer that hands every action to both. A slice reducer returns its prior
//! slice unchanged for actions it does not handle; that is what lets the root
//! show every action to every slice.

use crate::actions::TodoAction;
use crate::types::{Todo, TodoState, VisibilityFilter};
use unidirectional_core::composition::{
    BoxedReducer, CombinedReducer, combine_reducers, scope_reducer,
};
use unidirectional_core::reducer::Reducer;

/// Reducer for the `todos` slice
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl Reducer for TodosReducer {
    type State = Vec<Todo>;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, todos: &Vec<Todo>, action: &TodoAction, _env: &()) -> Vec<Todo> {
        match action {
            TodoAction::AddTodo { text } => {
                let mut next = Vec::with_capacity(todos.len() + 1);
                next.extend(todos.iter().cloned());
                next.push(Todo::new(text.clone()));
                next
            }
            // Out-of-range indices match no position, leaving every entry as it was.
            TodoAction::ToggleTodo { index } => todos
                .iter()
                .enumerate()
                .map(|(position, todo)| {
                    if position == *index {
                        todo.toggled()
                    } else {
                        todo.clone()
                    }
                })
                .collect(),
            TodoAction::SetVisibilityFilter { .. } => todos.clone(),
        }
    }
}

/// Reducer for the `visibility_filter` slice
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, prior: &VisibilityFilter, action: &TodoAction, _env: &()) -> VisibilityFilter {
        match action {
            TodoAction::SetVisibilityFilter { filter } => *filter,
            TodoAction::AddTodo { .. } | TodoAction::ToggleTodo { .. } => *prior,
        }
    }
}

/// Root reducer for [`TodoState`]
///
/// Gives each slice reducer the same action and only its own slice.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoAppReducer {
    visibility_filter: VisibilityFilterReducer,
    todos: TodosReducer,
}

impl TodoAppReducer {
    /// Creates a new `TodoAppReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visibility_filter: VisibilityFilterReducer,
            todos: TodosReducer,
        }
    }
}

impl Reducer for TodoAppReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, state: &TodoState, action: &TodoAction, env: &()) -> TodoState {
        TodoState {
            visibility_filter: self
                .visibility_filter
                .reduce(&state.visibility_filter, action, env),
            todos: self.todos.reduce(&state.todos, action, env),
        }
    }
}

/// The same root reducer assembled from the generic composition utilities
///
/// Behaves exactly like [`TodoAppReducer`]; useful when slices are added at
/// runtime or come from other crates.
#[must_use]
pub fn composed_reducer() -> CombinedReducer<TodoState, TodoAction, ()> {
    let slices: Vec<BoxedReducer<TodoState, TodoAction, ()>> = vec![
        Box::new(scope_reducer(
            VisibilityFilterReducer,
            |state: &TodoState| &state.visibility_filter,
            |state: &mut TodoState, filter: VisibilityFilter| state.visibility_filter = filter,
        )),
        Box::new(scope_reducer(
            TodosReducer,
            |state: &TodoState| &state.todos,
            |state: &mut TodoState, todos: Vec<Todo>| state.todos = todos,
        )),
    ];

    combine_reducers(slices)
}
