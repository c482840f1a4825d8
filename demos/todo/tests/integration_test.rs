//! Integration tests for the todo application with a Store

#![allow(clippy::unwrap_used)]

use todo::{
    Todo, TodoAction, TodoAppReducer, TodoState, TodoStore, VisibilityFilter, add_todo,
    set_visibility_filter, toggle_todo,
};
use unidirectional_runtime::{Store, StoreConfig, StoreError};
use unidirectional_testing::init_test_tracing;

fn new_store() -> TodoStore {
    init_test_tracing();
    Store::new(TodoState::new(), TodoAppReducer::new(), ())
}

#[tokio::test]
async fn test_session_through_store() {
    let store = new_store();

    let state = store.state(Clone::clone).await;
    assert_eq!(state, TodoState::new());

    let state = store.dispatch(add_todo("buy milk")).await.unwrap();
    assert_eq!(
        state,
        TodoState {
            visibility_filter: VisibilityFilter::ShowAll,
            todos: vec![Todo::new("buy milk")],
        }
    );

    let state = store.dispatch(toggle_todo(0)).await.unwrap();
    assert_eq!(state.todos, vec![Todo::new("buy milk").toggled()]);

    let state = store
        .dispatch(set_visibility_filter(VisibilityFilter::ShowActive))
        .await
        .unwrap();
    assert_eq!(state.visibility_filter, VisibilityFilter::ShowActive);
    assert_eq!(state.todos, vec![Todo::new("buy milk").toggled()]);
}

#[tokio::test]
async fn test_out_of_range_toggle_through_store() {
    let store = new_store();
    store.send(add_todo("only")).await.unwrap();
    let before = store.state(Clone::clone).await;
    assert_eq!(before.todos.len(), 1);

    store.send(toggle_todo(5)).await.unwrap();

    let after = store.state(Clone::clone).await;
    assert_eq!(after, before);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_adds() {
    init_test_tracing();
    let config = StoreConfig::default().with_broadcast_capacity(64);
    let store: TodoStore = Store::with_config(TodoState::new(), TodoAppReducer::new(), (), config);
    let mut applied = store.subscribe();

    let handles: Vec<_> = (0..20)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move {
                store.send(add_todo(format!("todo {n}"))).await.unwrap();
            })
        })
        .collect();

    #[allow(clippy::panic)]
    for handle in handles {
        if let Err(e) = handle.await {
            panic!("concurrent add task panicked: {e}");
        }
    }

    // Every add landed, in the order subscribers saw them.
    let todos = store.state(|s| s.todos.clone()).await;
    assert_eq!(todos.len(), 20);

    let mut seen = Vec::new();
    while let Ok(action) = applied.try_recv() {
        if let TodoAction::AddTodo { text } = action {
            seen.push(text);
        }
    }
    let stored: Vec<String> = todos.into_iter().map(|t| t.text).collect();
    assert_eq!(seen, stored);
}

#[tokio::test]
async fn test_shutdown_keeps_state_readable() {
    let store = new_store();
    store.send(add_todo("before")).await.unwrap();

    store.shutdown();

    assert_eq!(
        store.send(add_todo("after")).await,
        Err(StoreError::ShutdownInProgress)
    );
    let texts: Vec<String> = store
        .state(|s| s.todos.iter().map(|t| t.text.clone()).collect())
        .await;
    assert_eq!(texts, vec!["before".to_string()]);
}

#[tokio::test]
async fn test_store_with_composed_reducer() {
    init_test_tracing();
    let store = Store::new(TodoState::new(), todo::composed_reducer(), ());

    store.send(add_todo("a")).await.unwrap();
    store.send(add_todo("b")).await.unwrap();
    store.send(toggle_todo(1)).await.unwrap();
    store
        .send(set_visibility_filter(VisibilityFilter::ShowCompleted))
        .await
        .unwrap();

    let state = store.state(Clone::clone).await;
    assert_eq!(state.visibility_filter, VisibilityFilter::ShowCompleted);
    assert_eq!(state.todos, vec![Todo::new("a"), Todo::new("b").toggled()]);
}
