//! Todo example binary
//!
//! Walks a short session through a store and prints what a view would see.

use anyhow::Context;
use todo::selectors::{active_count, completed_count, visible_todos};
use todo::{
    AddTodoForm, FilterLink, TodoAppReducer, TodoListBinding, TodoState, TodoStore,
    VisibilityFilter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unidirectional_runtime::metrics::MetricsRecorder;
use unidirectional_runtime::{Store, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,unidirectional_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut metrics = MetricsRecorder::new();
    metrics.install().context("installing metrics recorder")?;

    println!("=== Todo Example: Unidirectional State ===\n");

    let config = StoreConfig::default().with_label("todos");
    let store: TodoStore = Store::with_config(TodoState::new(), TodoAppReducer::new(), (), config);

    let mut applied = store.subscribe();
    let watcher = tokio::spawn(async move {
        let mut kinds = Vec::new();
        while let Ok(action) = applied.recv().await {
            kinds.push(unidirectional_core::action::Action::kind(&action));
        }
        kinds
    });

    print_state("Initial state", &store).await?;

    println!("\n>>> Submitting: \"buy milk\"");
    AddTodoForm.submit(&store, "buy milk").await?;
    print_state("After AddTodo", &store).await?;

    println!("\n>>> Submitting: \"   \" (ignored)");
    let sent = AddTodoForm.submit(&store, "   ").await?;
    println!("Sent: {sent}");

    println!("\n>>> Clicking todo 0");
    TodoListBinding.on_todo_click(&store, 0).await?;
    print_state("After ToggleTodo", &store).await?;

    println!("\n>>> Clicking filter SHOW_ACTIVE");
    FilterLink::new(VisibilityFilter::ShowActive).on_click(&store).await?;
    print_state("After SetVisibilityFilter", &store).await?;

    AddTodoForm.submit(&store, "walk the dog").await?;

    println!("\n=== Views ===");
    let mut state = store.state(Clone::clone).await;
    for filter in VisibilityFilter::ALL {
        state.visibility_filter = filter;
        let shown: Vec<String> = visible_todos(&state)
            .into_iter()
            .map(|(index, todo)| {
                let mark = if todo.completed { "x" } else { " " };
                format!("{index}:[{mark}] {}", todo.text)
            })
            .collect();
        println!("{:<14} {shown:?}", filter.as_str());
    }
    println!(
        "Completed: {}, active: {}",
        completed_count(&state),
        active_count(&state)
    );

    store.shutdown();
    drop(store);
    let kinds = watcher.await.context("joining subscriber task")?;
    println!("\nApplied actions: {kinds:?}");

    println!("\n=== Metrics ===");
    match metrics.render() {
        Some(rendered) => println!("{rendered}"),
        None => println!("(recorder installed elsewhere)"),
    }

    Ok(())
}

async fn print_state(title: &str, store: &TodoStore) -> anyhow::Result<()> {
    let json = store
        .state(serde_json::to_string_pretty)
        .await
        .context("serializing state")?;
    println!("{title}:\n{json}");
    Ok(())
}
