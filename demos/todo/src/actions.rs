//! Action vocabulary and action creators.
//!
//! Actions are the only way to ask for a state change. Creators are plain
//! constructors: they never validate, trim, or bounds-check. Input hygiene
//! belongs to the caller (see [`crate::containers::AddTodoForm`]), and the
//! reducers tolerate anything the creators can build.

use crate::types::VisibilityFilter;
use serde::{Deserialize, Serialize};
use unidirectional_macros::Action;

/// Every state change the todo application understands
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new, not yet completed todo
    AddTodo {
        /// Todo text, stored as given
        text: String,
    },

    /// Flip `completed` on the todo at a position
    ToggleTodo {
        /// Position in insertion order
        index: usize,
    },

    /// Choose which todos list views show
    SetVisibilityFilter {
        /// Filter to select
        filter: VisibilityFilter,
    },
}

/// Builds [`TodoAction::AddTodo`]
#[must_use]
pub fn add_todo(text: impl Into<String>) -> TodoAction {
    TodoAction::AddTodo { text: text.into() }
}

/// Builds [`TodoAction::ToggleTodo`]
#[must_use]
pub const fn toggle_todo(index: usize) -> TodoAction {
    TodoAction::ToggleTodo { index }
}

/// Builds [`TodoAction::SetVisibilityFilter`]
#[must_use]
pub const fn set_visibility_filter(filter: VisibilityFilter) -> TodoAction {
    TodoAction::SetVisibilityFilter { filter }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use unidirectional_core::action::Action as _;

    #[test]
    fn add_todo_keeps_text_verbatim() {
        assert_eq!(
            add_todo("  Build my first app "),
            TodoAction::AddTodo {
                text: "  Build my first app ".to_string()
            }
        );
        assert_eq!(add_todo(""), TodoAction::AddTodo { text: String::new() });
    }

    #[test]
    fn toggle_todo_does_not_bounds_check() {
        assert_eq!(toggle_todo(usize::MAX), TodoAction::ToggleTodo { index: usize::MAX });
    }

    #[test]
    fn set_visibility_filter_builds_action() {
        assert_eq!(
            set_visibility_filter(VisibilityFilter::ShowCompleted),
            TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted
            }
        );
    }

    #[test]
    fn action_kinds() {
        assert_eq!(add_todo("x").kind(), "ADD_TODO");
        assert_eq!(toggle_todo(0).kind(), "TOGGLE_TODO");
        assert_eq!(
            set_visibility_filter(VisibilityFilter::ShowAll).kind(),
            "SET_VISIBILITY_FILTER"
        );
    }

    #[test]
    fn actions_serialize_as_tagged_objects() {
        let json = serde_json::to_value(toggle_todo(2)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "TOGGLE_TODO", "index": 2 }));

        let parsed: TodoAction = serde_json::from_str(
            r#"{ "type": "SET_VISIBILITY_FILTER", "filter": "SHOW_ACTIVE" }"#,
        )
        .unwrap();
        assert_eq!(parsed, set_visibility_filter(VisibilityFilter::ShowActive));
    }
}
