//! Mock todo sources for deterministic tests.
//!
//! Three doubles cover the fetch lifecycle:
//!
//! - [`StaticSource`]: resolves immediately with a canned todo list
//! - [`FailingSource`]: resolves immediately with a canned error
//! - [`GatedSource`]: parks every fetch until the test resolves it by hand,
//!   which is how in-flight interleavings (mutate-while-loading, overlapping
//!   loads) are driven deterministically

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use todotable_core::environment::{SourceError, TodoSource};
use todotable_core::types::Todo;
use tokio::sync::{Notify, oneshot};

/// Source that always returns the same todo list.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    todos: Vec<Todo>,
}

impl StaticSource {
    /// Creates a source resolving with the given todos.
    #[must_use]
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}

impl TodoSource for StaticSource {
    fn fetch_todos(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Todo>, SourceError>> + Send + '_>> {
        let todos = self.todos.clone();
        Box::pin(async move { Ok(todos) })
    }
}

/// Source that always fails with the same error.
#[derive(Clone, Debug)]
pub struct FailingSource {
    error: SourceError,
}

impl FailingSource {
    /// Creates a source failing with the given error.
    #[must_use]
    pub const fn new(error: SourceError) -> Self {
        Self { error }
    }
}

impl Default for FailingSource {
    fn default() -> Self {
        Self::new(SourceError::Status(500))
    }
}

impl TodoSource for FailingSource {
    fn fetch_todos(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Todo>, SourceError>> + Send + '_>> {
        let error = self.error.clone();
        Box::pin(async move { Err(error) })
    }
}

/// Source whose fetches park until the test resolves them.
///
/// Every call to `fetch_todos` registers a pending request and waits; the
/// test releases requests one at a time with [`resolve_next`], in whatever
/// order the scenario needs. Requests are resolved in arrival order.
///
/// [`resolve_next`]: GatedSource::resolve_next
#[derive(Debug, Default)]
pub struct GatedSource {
    pending: Mutex<VecDeque<oneshot::Sender<Result<Vec<Todo>, SourceError>>>>,
    arrived: Notify,
}

impl GatedSource {
    /// Creates a gated source with no pending requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fetches currently parked.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    #[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
    pub fn pending_requests(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Waits until at least `count` fetches are parked.
    pub async fn wait_for_requests(&self, count: usize) {
        loop {
            // Register interest before checking, so an arrival between the
            // check and the await is not missed.
            let arrived = self.arrived.notified();
            if self.pending_requests() >= count {
                return;
            }
            arrived.await;
        }
    }

    /// Resolves the oldest parked fetch with the given outcome.
    ///
    /// Returns `false` when no fetch was parked.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
    pub fn resolve_next(&self, outcome: Result<Vec<Todo>, SourceError>) -> bool {
        let sender = self.pending.lock().unwrap().pop_front();
        match sender {
            Some(sender) => {
                let _ = sender.send(outcome);
                true
            }
            None => false,
        }
    }
}

impl TodoSource for GatedSource {
    #[allow(clippy::unwrap_used)] // Mutex poison is unrecoverable in tests
    fn fetch_todos(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Todo>, SourceError>> + Send + '_>> {
        let (sender, receiver) = oneshot::channel();
        self.pending.lock().unwrap().push_back(sender);
        self.arrived.notify_waiters();

        Box::pin(async move {
            receiver
                .await
                .unwrap_or_else(|_| Err(SourceError::Transport("gate dropped".to_string())))
        })
    }
}
