//! Integration tests for the Store runtime: the fetch lifecycle, snapshot
//! observation, and the interleavings the single-threaded design allows
//! around an in-flight load.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::Arc;
use std::time::Duration;
use todotable_core::types::{LoadStatus, SortKey, SortOrder, Todo, TodoAction, TodoState};
use todotable_core::{SourceError, TodoEnvironment, TodoReducer, TodoSource};
use todotable_runtime::Store;
use todotable_testing::{FailingSource, GatedSource, StaticSource};

type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

fn todo(id: u64, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        completed,
    }
}

fn store_with(source: Arc<dyn TodoSource>) -> TodoStore {
    Store::new(
        TodoState::new(),
        TodoReducer::new(),
        TodoEnvironment::new(source),
    )
}

async fn ids(store: &TodoStore) -> Vec<u64> {
    store
        .state(|s| s.todos.iter().map(|t| t.id).collect())
        .await
}

#[tokio::test]
async fn load_replaces_todos_and_reports_success() {
    let source = Arc::new(StaticSource::new(vec![
        todo(1, "Todo 1", false),
        todo(2, "Todo 2", true),
    ]));
    let store = store_with(source);

    let mut handle = store.send(TodoAction::Load).await;
    handle.wait().await;

    assert_eq!(store.state(|s| s.status).await, LoadStatus::Success);
    assert_eq!(ids(&store).await, vec![1, 2]);
}

#[tokio::test]
async fn failed_load_leaves_existing_todos_untouched() {
    let source = Arc::new(FailingSource::new(SourceError::Transport(
        "connection refused".to_string(),
    )));
    let store = store_with(source);

    // Seed some local state first.
    store.send(TodoAction::Add { title: "kept".to_string() }).await;

    let mut handle = store.send(TodoAction::Load).await;
    handle.wait().await;

    assert_eq!(store.state(|s| s.status).await, LoadStatus::Error);
    assert_eq!(ids(&store).await, vec![1]);
}

#[tokio::test]
async fn loading_is_visible_while_the_fetch_is_parked() {
    let source = Arc::new(GatedSource::new());
    let store = store_with(Arc::clone(&source) as Arc<dyn TodoSource>);

    let handle = store.send(TodoAction::Load).await;
    source.wait_for_requests(1).await;

    assert_eq!(store.state(|s| s.status).await, LoadStatus::Loading);
    drop(handle);

    source.resolve_next(Ok(vec![todo(1, "later", false)]));
}

#[tokio::test]
async fn synchronous_transitions_are_not_queued_behind_a_pending_load() {
    let source = Arc::new(GatedSource::new());
    let store = store_with(Arc::clone(&source) as Arc<dyn TodoSource>);

    let mut handle = store.send(TodoAction::Load).await;
    source.wait_for_requests(1).await;

    // These apply immediately against the in-memory state.
    store.send(TodoAction::Add { title: "local".to_string() }).await;
    store.send(TodoAction::Complete { id: 1 }).await;
    assert!(store.state(|s| s.get(1).unwrap().completed).await);

    // When the load resolves it overwrites the local edits wholesale: the
    // documented lost-update behavior.
    source.resolve_next(Ok(vec![todo(9, "remote", false)]));
    handle.wait().await;

    assert_eq!(ids(&store).await, vec![9]);
    assert_eq!(store.state(|s| s.status).await, LoadStatus::Success);
}

#[tokio::test]
async fn overlapping_loads_resolve_last_write_wins() {
    let source = Arc::new(GatedSource::new());
    let store = store_with(Arc::clone(&source) as Arc<dyn TodoSource>);

    let mut first = store.send(TodoAction::Load).await;
    source.wait_for_requests(1).await;
    let mut second = store.send(TodoAction::Load).await;
    source.wait_for_requests(2).await;

    // Requests resolve in arrival order here, so the second load's payload
    // lands last and wins.
    source.resolve_next(Ok(vec![todo(1, "first", false)]));
    first.wait().await;
    source.resolve_next(Ok(vec![todo(2, "second", false)]));
    second.wait().await;

    assert_eq!(ids(&store).await, vec![2]);
}

#[tokio::test]
async fn a_late_failure_overwrites_an_earlier_success() {
    let source = Arc::new(GatedSource::new());
    let store = store_with(Arc::clone(&source) as Arc<dyn TodoSource>);

    let mut first = store.send(TodoAction::Load).await;
    source.wait_for_requests(1).await;
    let mut second = store.send(TodoAction::Load).await;
    source.wait_for_requests(2).await;

    source.resolve_next(Ok(vec![todo(1, "loaded", false)]));
    first.wait().await;
    source.resolve_next(Err(SourceError::Status(502)));
    second.wait().await;

    // Status reflects the most recent resolution; todos keep the successful
    // payload because a failure never touches them.
    assert_eq!(store.state(|s| s.status).await, LoadStatus::Error);
    assert_eq!(ids(&store).await, vec![1]);
}

#[tokio::test]
async fn snapshots_track_every_settled_transition() {
    let source = Arc::new(StaticSource::new(vec![todo(1, "remote", false)]));
    let store = store_with(source);
    let mut snapshots = store.subscribe();

    let mut handle = store.send(TodoAction::Load).await;
    handle.wait().await;

    snapshots.changed().await.unwrap();
    let snapshot = snapshots.borrow_and_update().clone();
    assert_eq!(snapshot.status, LoadStatus::Success);
    assert_eq!(snapshot.todos, vec![todo(1, "remote", false)]);

    store
        .send(TodoAction::ToggleSort { key: SortKey::Title, order: None })
        .await;
    snapshots.changed().await.unwrap();
    let snapshot = snapshots.borrow_and_update().clone();
    assert_eq!(snapshot.sort.key, SortKey::Title);
    assert_eq!(snapshot.sort.order, SortOrder::Descending);
}

#[tokio::test]
async fn wait_with_timeout_expires_while_a_fetch_is_parked() {
    let source = Arc::new(GatedSource::new());
    let store = store_with(Arc::clone(&source) as Arc<dyn TodoSource>);

    let mut handle = store.send(TodoAction::Load).await;
    source.wait_for_requests(1).await;

    assert!(
        handle
            .wait_with_timeout(Duration::from_millis(50))
            .await
            .is_err()
    );

    source.resolve_next(Ok(vec![]));
    handle.wait().await;
    assert_eq!(store.state(|s| s.status).await, LoadStatus::Success);
}
