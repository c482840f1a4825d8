//! Todo list built on the unidirectional state core.
//!
//! The application state has two slices, the todo list and the visibility
//! filter. Each slice has its own reducer, and [`TodoAppReducer`] hands every
//! action to both. It demonstrates:
//!
//! - Action creators that build plain data (`add_todo`, `toggle_todo`,
//!   `set_visibility_filter`)
//! - Slice reducers that pass unknown actions through untouched
//! - Root composition, by hand and with `combine_reducers`
//! - Selectors and view bindings on top of a [`Store`](unidirectional_runtime::Store)
//!
//! # Quick Start
//!
//! ```no_run
//! use todo::{TodoAppReducer, TodoState, VisibilityFilter, add_todo, set_visibility_filter, toggle_todo};
//! use unidirectional_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(TodoState::new(), TodoAppReducer::new(), ());
//!
//! store.send(add_todo("buy milk")).await?;
//! store.send(toggle_todo(0)).await?;
//! let state = store.dispatch(set_visibility_filter(VisibilityFilter::ShowActive)).await?;
//!
//! assert!(state.todos[0].completed);
//! assert_eq!(state.visibility_filter, VisibilityFilter::ShowActive);
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod containers;
pub mod reducer;
pub mod selectors;
pub mod types;

// Re-export commonly used types
pub use actions::{TodoAction, add_todo, set_visibility_filter, toggle_todo};
pub use containers::{AddTodoForm, FilterLink, TodoListBinding, TodoStore};
pub use reducer::{TodoAppReducer, TodosReducer, VisibilityFilterReducer, composed_reducer};
pub use types::{Todo, TodoState, VisibilityFilter};
