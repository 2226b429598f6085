//! The production todo source: a reqwest client against a REST endpoint.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use todotable_core::environment::{SourceError, TodoSource};
use todotable_core::types::Todo;

/// Path of the todos collection under the base URL.
pub const TODOS_PATH: &str = "/todos";

/// Default per-request timeout.
///
/// Timeouts are the client's responsibility, not the store's; a request that
/// exceeds this surfaces as a transport failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`TodoSource`] backed by an HTTP endpoint.
///
/// Issues `GET {base_url}/todos` and decodes the body straight into the
/// [`Todo`] shape; extra remote fields such as `userId` are dropped during
/// deserialization and never reach the store.
#[derive(Clone, Debug)]
pub struct HttpTodoSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTodoSource {
    /// Creates a source for the given base URL with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] if the underlying client cannot be
    /// constructed (misconfigured TLS backend).
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|error| SourceError::Transport(error.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a source around a preconfigured client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The URL the source fetches from.
    #[must_use]
    pub fn todos_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }
}

impl TodoSource for HttpTodoSource {
    fn fetch_todos(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Todo>, SourceError>> + Send + '_>> {
        Box::pin(async move {
            let url = self.todos_url();
            tracing::debug!(%url, "fetching todos");

            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(into_source_error)?
                .error_for_status()
                .map_err(into_source_error)?;

            let todos = response
                .json::<Vec<Todo>>()
                .await
                .map_err(into_source_error)?;

            tracing::debug!(count = todos.len(), "todos fetched");
            Ok(todos)
        })
    }
}

fn into_source_error(error: reqwest::Error) -> SourceError {
    if let Some(status) = error.status() {
        SourceError::Status(status.as_u16())
    } else if error.is_decode() {
        SourceError::Decode(error.to_string())
    } else {
        SourceError::Transport(error.to_string())
    }
}
