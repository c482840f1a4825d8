//! Derived views over [`TodoState`].
//!
//! Selectors only read. Views hold on to the original position of each todo
//! because [`crate::actions::toggle_todo`] addresses todos by position in the
//! full list, not in the filtered one.

use crate::types::{Todo, TodoState};

/// Todos that pass the current visibility filter, with their positions
#[must_use]
pub fn visible_todos(state: &TodoState) -> Vec<(usize, &Todo)> {
    state
        .todos
        .iter()
        .enumerate()
        .filter(|(_, todo)| state.visibility_filter.matches(todo))
        .collect()
}

/// Number of completed todos
#[must_use]
pub fn completed_count(state: &TodoState) -> usize {
    state.todos.iter().filter(|todo| todo.completed).count()
}

/// Number of todos not yet completed
#[must_use]
pub fn active_count(state: &TodoState) -> usize {
    state.todos.len() - completed_count(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VisibilityFilter;

    fn state_with(filter: VisibilityFilter) -> TodoState {
        TodoState {
            visibility_filter: filter,
            todos: vec![
                Todo::new("write tests"),
                Todo::new("buy milk").toggled(),
                Todo::new("call mom"),
            ],
        }
    }

    fn positions(state: &TodoState) -> Vec<usize> {
        visible_todos(state).into_iter().map(|(index, _)| index).collect()
    }

    #[test]
    fn show_all_keeps_everything_in_order() {
        let state = state_with(VisibilityFilter::ShowAll);
        assert_eq!(positions(&state), vec![0, 1, 2]);
    }

    #[test]
    fn show_active_keeps_original_positions() {
        let state = state_with(VisibilityFilter::ShowActive);
        let visible = visible_todos(&state);

        assert_eq!(positions(&state), vec![0, 2]);
        assert_eq!(visible[1].1.text, "call mom");
    }

    #[test]
    fn show_completed() {
        let state = state_with(VisibilityFilter::ShowCompleted);
        assert_eq!(positions(&state), vec![1]);
    }

    #[test]
    fn counts() {
        let state = state_with(VisibilityFilter::ShowAll);
        assert_eq!(completed_count(&state), 1);
        assert_eq!(active_count(&state), 2);

        let empty = TodoState::new();
        assert_eq!(completed_count(&empty), 0);
        assert_eq!(active_count(&empty), 0);
        assert!(visible_todos(&empty).is_empty());
    }
}
