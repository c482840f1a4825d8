//! Bindings between view events and the store.
//!
//! Each binding maps one kind of user gesture to one action creator and sends
//! the result to a [`TodoStore`]. Rendering is left to whoever owns the view.

use crate::actions::{add_todo, set_visibility_filter, toggle_todo};
use crate::reducer::TodoAppReducer;
use crate::types::{TodoState, VisibilityFilter};
use unidirectional_runtime::{Store, StoreError};

/// Store type used by the todo application
pub type TodoStore = Store<TodoState, crate::actions::TodoAction, (), TodoAppReducer>;

/// A link in the filter bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterLink {
    /// Filter this link selects
    pub filter: VisibilityFilter,
}

impl FilterLink {
    /// Creates a link for `filter`
    #[must_use]
    pub const fn new(filter: VisibilityFilter) -> Self {
        Self { filter }
    }

    /// One link per filter, in filter bar order
    #[must_use]
    pub fn all() -> [Self; 3] {
        VisibilityFilter::ALL.map(Self::new)
    }

    /// Whether this link's filter is the one currently selected
    #[must_use]
    pub fn is_active(&self, state: &TodoState) -> bool {
        state.visibility_filter == self.filter
    }

    /// Select this link's filter
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    pub async fn on_click(&self, store: &TodoStore) -> Result<(), StoreError> {
        store.send(set_visibility_filter(self.filter)).await
    }
}

/// The "add todo" input form
#[derive(Clone, Copy, Debug, Default)]
pub struct AddTodoForm;

impl AddTodoForm {
    /// Submit the form contents
    ///
    /// Input that is blank after trimming is dropped without touching the
    /// store. Anything else is added exactly as typed. Returns whether an
    /// action was sent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    pub async fn submit(&self, store: &TodoStore, input: &str) -> Result<bool, StoreError> {
        if input.trim().is_empty() {
            tracing::debug!("Ignoring blank todo input");
            return Ok(false);
        }

        store.send(add_todo(input)).await?;
        Ok(true)
    }
}

/// The todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoListBinding;

impl TodoListBinding {
    /// Toggle the todo at `index` in the full list
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
    pub async fn on_todo_click(&self, store: &TodoStore, index: usize) -> Result<(), StoreError> {
        store.send(toggle_todo(index)).await
    }
}
