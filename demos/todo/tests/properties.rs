//! Property tests for the todo reducers

use proptest::prelude::*;
use todo::{
    Todo, TodoAction, TodoAppReducer, TodoState, TodosReducer, VisibilityFilter,
    VisibilityFilterReducer, add_todo, composed_reducer, set_visibility_filter, toggle_todo,
};
use unidirectional_core::reducer::Reducer;
use unidirectional_testing::properties::action_sequence;
use unidirectional_testing::replay;

fn filter_strategy() -> impl Strategy<Value = VisibilityFilter> {
    prop_oneof![
        Just(VisibilityFilter::ShowAll),
        Just(VisibilityFilter::ShowCompleted),
        Just(VisibilityFilter::ShowActive),
    ]
}

fn todo_strategy() -> impl Strategy<Value = Todo> {
    (".{0,12}", any::<bool>()).prop_map(|(text, completed)| Todo { text, completed })
}

fn action_strategy() -> impl Strategy<Value = TodoAction> {
    prop_oneof![
        ".{0,12}".prop_map(add_todo),
        (0usize..8).prop_map(toggle_todo),
        filter_strategy().prop_map(set_visibility_filter),
    ]
}

fn state_strategy() -> impl Strategy<Value = TodoState> {
    (filter_strategy(), prop::collection::vec(todo_strategy(), 0..6)).prop_map(
        |(visibility_filter, todos)| TodoState {
            visibility_filter,
            todos,
        },
    )
}

proptest! {
    #[test]
    fn toggling_twice_restores_the_list(todos in prop::collection::vec(todo_strategy(), 0..6), index in 0usize..8) {
        let twice = replay(&TodosReducer, &todos, &[toggle_todo(index), toggle_todo(index)], &());
        prop_assert_eq!(twice, todos);
    }

    #[test]
    fn add_only_ever_appends(todos in prop::collection::vec(todo_strategy(), 0..6), text in ".{0,12}") {
        let next = TodosReducer.reduce(&todos, &add_todo(text.clone()), &());

        prop_assert_eq!(next.len(), todos.len() + 1);
        prop_assert_eq!(&next[..todos.len()], &todos[..]);
        prop_assert_eq!(next.last(), Some(&Todo::new(text)));
    }

    #[test]
    fn toggle_preserves_length_and_order(todos in prop::collection::vec(todo_strategy(), 0..6), index in 0usize..8) {
        let next = TodosReducer.reduce(&todos, &toggle_todo(index), &());

        prop_assert_eq!(next.len(), todos.len());
        for (position, (before, after)) in todos.iter().zip(&next).enumerate() {
            prop_assert_eq!(&before.text, &after.text);
            prop_assert_eq!(after.completed, before.completed ^ (position == index));
        }
    }

    #[test]
    fn out_of_range_toggle_is_identity(todos in prop::collection::vec(todo_strategy(), 0..6), extra in 0usize..4) {
        let next = TodosReducer.reduce(&todos, &toggle_todo(todos.len() + extra), &());
        prop_assert_eq!(next, todos);
    }

    #[test]
    fn filter_is_set_exactly(prior in filter_strategy(), filter in filter_strategy()) {
        let next = VisibilityFilterReducer.reduce(&prior, &set_visibility_filter(filter), &());
        prop_assert_eq!(next, filter);
    }

    #[test]
    fn slices_pass_through_foreign_actions(state in state_strategy(), text in ".{0,12}", index in 0usize..8, filter in filter_strategy()) {
        let filter_after_todo_actions =
            replay(&VisibilityFilterReducer, &state.visibility_filter, &[add_todo(text), toggle_todo(index)], &());
        prop_assert_eq!(filter_after_todo_actions, state.visibility_filter);

        let todos_after_filter = TodosReducer.reduce(&state.todos, &set_visibility_filter(filter), &());
        prop_assert_eq!(todos_after_filter, state.todos);
    }

    #[test]
    fn root_is_the_product_of_its_slices(state in state_strategy(), action in action_strategy()) {
        let next = TodoAppReducer::new().reduce(&state, &action, &());

        prop_assert_eq!(
            next.visibility_filter,
            VisibilityFilterReducer.reduce(&state.visibility_filter, &action, &())
        );
        prop_assert_eq!(next.todos, TodosReducer.reduce(&state.todos, &action, &()));
    }

    #[test]
    fn composed_reducer_matches_root(actions in action_sequence(action_strategy(), 24)) {
        let initial = TodoState::new();
        let by_hand = replay(&TodoAppReducer::new(), &initial, &actions, &());
        let composed = replay(&composed_reducer(), &initial, &actions, &());

        prop_assert_eq!(composed, by_hand);
    }

    #[test]
    fn replay_never_mutates_its_input(state in state_strategy(), actions in action_sequence(action_strategy(), 12)) {
        let snapshot = state.clone();
        let _ = replay(&TodoAppReducer::new(), &state, &actions, &());
        prop_assert_eq!(state, snapshot);
    }
}
