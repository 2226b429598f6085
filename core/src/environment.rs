//! Dependency injection for the todo reducer.
//!
//! The only external collaborator the reducer talks to is the remote todo
//! source, abstracted behind the [`TodoSource`] trait so the production HTTP
//! client and the deterministic test doubles are interchangeable.

use crate::types::Todo;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Why a fetch from the remote source failed.
///
/// The reducer collapses every variant into `LoadStatus::Error`; the variants
/// exist for logging and for source implementations to report precisely.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source answered with a non-success HTTP status
    #[error("source returned status {0}")]
    Status(u16),

    /// The request never completed (connect, DNS, timeout, ...)
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was not a todo list
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// A remote sequence of todo records.
///
/// # Dyn Compatibility
///
/// This trait uses an explicit `Pin<Box<dyn Future>>` return instead of
/// `async fn` to enable trait object usage (`Arc<dyn TodoSource>`), which the
/// effect system needs when the reducer captures the source in a fetch
/// future.
pub trait TodoSource: Send + Sync {
    /// Fetch all todos from the source.
    ///
    /// Implementations return records already stripped to the [`Todo`] shape;
    /// extra remote fields (such as `userId`) never reach the store.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] for transport failures, non-2xx responses,
    /// and undecodable bodies. Callers treat all of them uniformly as a load
    /// failure.
    fn fetch_todos(&self)
    -> Pin<Box<dyn Future<Output = Result<Vec<Todo>, SourceError>> + Send + '_>>;
}

/// Environment dependencies for the todo reducer.
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Remote source the `Load` effect fetches from
    pub source: Arc<dyn TodoSource>,
}

impl TodoEnvironment {
    /// Creates an environment around the given source.
    #[must_use]
    pub fn new(source: Arc<dyn TodoSource>) -> Self {
        Self { source }
    }

    /// Environment with no reachable source.
    ///
    /// Every fetch fails with a transport error. Intended for contexts that
    /// only exercise the synchronous transitions.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(Arc::new(DetachedSource))
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Source used by [`TodoEnvironment::detached`].
struct DetachedSource;

impl TodoSource for DetachedSource {
    fn fetch_todos(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Todo>, SourceError>> + Send + '_>> {
        Box::pin(async {
            Err(SourceError::Transport(
                "no todo source configured".to_string(),
            ))
        })
    }
}
