//! CLI demo of the todotable engine.
//!
//! Plays the view layer's part: loads todos from the public placeholder API,
//! renders the table from store snapshots, and drives the sort/complete/
//! delete/add intents a user would click through.

use std::sync::Arc;
use todotable_core::types::{SortKey, TodoAction, TodoState};
use todotable_core::{TodoEnvironment, TodoReducer};
use todotable_runtime::{Store, http::HttpTodoSource};

mod form;

const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

fn render(state: &TodoState) {
    println!(
        "status: {:?} | sorted by {} | {} todos",
        state.status,
        state.sort.key,
        state.todos.len()
    );
    println!("{:>5}  {:<40}  completed", "id", "title");
    for todo in state.todos.iter().take(10) {
        let title: String = todo.title.chars().take(40).collect();
        let mark = if todo.completed { "x" } else { " " };
        println!("{:>5}  {title:<40}  [{mark}]", todo.id);
    }
    if state.todos.len() > 10 {
        println!("  ... and {} more", state.todos.len() - 10);
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let source = Arc::new(HttpTodoSource::new(BASE_URL)?);
    let store = Store::new(
        TodoState::new(),
        TodoReducer::new(),
        TodoEnvironment::new(source),
    );

    println!("fetching todos from {BASE_URL}...\n");
    let mut handle = store.send(TodoAction::Load).await;
    handle.wait().await;
    tracing::info!(
        status = ?store.state(|s| s.status).await,
        count = store.state(|s| s.todos.len()).await,
        "load settled"
    );
    render(&store.state(Clone::clone).await);

    println!("sorting by title...");
    store
        .send(TodoAction::ToggleSort { key: SortKey::Title, order: None })
        .await;
    render(&store.state(Clone::clone).await);

    println!("completing and deleting the first visible todo...");
    let first_id = store.state(|s| s.todos.first().map(|t| t.id)).await;
    if let Some(id) = first_id {
        store.send(TodoAction::Complete { id }).await;
        store.send(TodoAction::Delete { id }).await;
    }
    render(&store.state(Clone::clone).await);

    println!("adding a todo through the form...");
    let snapshot = store.state(Clone::clone).await;
    match form::validate_title(&snapshot, "  Ship the todotable demo  ") {
        Ok(title) => {
            store.send(TodoAction::Add { title }).await;
        }
        Err(error) => {
            println!("rejected ({:?}): {error}", error.severity());
        }
    }
    render(&store.state(Clone::clone).await);

    Ok(())
}
