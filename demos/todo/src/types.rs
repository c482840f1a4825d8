//! Domain types for the todo list.
//!
//! The whole application state is two slices: which todos exist (in insertion
//! order) and which of them the user has asked to see.

use serde::{Deserialize, Serialize};

/// Which todos a list view should show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    /// Every todo
    #[default]
    ShowAll,
    /// Only completed todos
    ShowCompleted,
    /// Only todos not yet completed
    ShowActive,
}

impl VisibilityFilter {
    /// All filters, in the order a filter bar lists them
    pub const ALL: [Self; 3] = [Self::ShowAll, Self::ShowActive, Self::ShowCompleted];

    /// Whether a todo passes this filter
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::ShowAll => true,
            Self::ShowCompleted => todo.completed,
            Self::ShowActive => !todo.completed,
        }
    }

    /// Wire name of the filter (`SHOW_ALL`, ...)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowAll => "SHOW_ALL",
            Self::ShowCompleted => "SHOW_COMPLETED",
            Self::ShowActive => "SHOW_ACTIVE",
        }
    }
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// What needs doing
    pub text: String,
    /// Whether it has been done
    pub completed: bool,
}

impl Todo {
    /// Creates a todo that is not yet completed
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this todo with `completed` inverted
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            text: self.text.clone(),
            completed: !self.completed,
        }
    }
}

/// State of the todo application
///
/// `todos` is kept in insertion order. Toggles address entries by position,
/// so nothing may reorder or remove entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoState {
    /// Filter currently selected by the user
    pub visibility_filter: VisibilityFilter,
    /// All todos, oldest first
    pub todos: Vec<Todo>,
}

impl TodoState {
    /// Creates the initial state: `ShowAll`, no todos
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the todo at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.todos.get(index)
    }
}
