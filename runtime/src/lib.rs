//! # Todotable Runtime
//!
//! The [`Store`] runtime that coordinates reducer execution and effect
//! handling, plus the production [`http::HttpTodoSource`].
//!
//! ## Core Components
//!
//! - **Store**: owns the state, applies transitions atomically, and executes
//!   effect descriptions on spawned tasks
//! - **Effect feedback loop**: a future that yields an action sends it back
//!   through the store, so a fetch resolution lands as an ordinary transition
//! - **Snapshot channel**: every transition publishes a cloned state snapshot
//!   over a `watch` channel for the view layer to re-render from
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use todotable_core::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use todotable_runtime::{Store, http::HttpTodoSource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Arc::new(HttpTodoSource::new("https://jsonplaceholder.typicode.com")?);
//! let store = Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment::new(source));
//!
//! let mut handle = store.send(TodoAction::Load).await;
//! handle.wait().await;
//!
//! let fetched = store.state(|s| s.todos.len()).await;
//! println!("{fetched} todos loaded");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use todotable_core::effect::Effect;
use todotable_core::reducer::Reducer;
use tokio::sync::{RwLock, watch};

pub mod http;

/// Handle for tracking effect completion.
///
/// Returned by [`Store::send`] to allow waiting for the effects of an action
/// to settle. A fetch counts as settled only once its resolution has been fed
/// back through the store, so after `wait()` the load outcome is visible in
/// state.
#[derive(Clone)]
pub struct EffectHandle {
    pending: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (notifier, completion) = watch::channel(());

        let handle = Self {
            pending: Arc::clone(&counter),
            completion,
        };
        let tracking = EffectTracking { counter, notifier };
        (handle, tracking)
    }

    /// Waits until every effect spawned for the action has completed.
    ///
    /// Returns immediately when the action produced no effects.
    pub async fn wait(&mut self) {
        while self.pending.load(Ordering::SeqCst) > 0 {
            let _ = self.completion.changed().await;
        }
    }

    /// [`wait`](Self::wait) bounded by a timeout.
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if the timeout expires before the effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), ()> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| ())
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.pending.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: tracking context shared by the effects of one action.
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            let _ = self.notifier.send(());
        }
    }
}

/// RAII guard that decrements the effect counter on drop, so the counter is
/// balanced even if an effect task panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// The Store - runtime coordinator for a reducer.
///
/// The Store manages:
/// 1. State (behind an `RwLock`; each transition holds the write lock for the
///    whole reducer call, so no partially-applied transition is observable)
/// 2. Reducer (transition logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution with the action feedback loop
///
/// Overlapping async effects are not queued or cancelled: whichever
/// resolution feeds back last wins, which for the todo engine reproduces the
/// documented last-write-wins behavior of overlapping loads.
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
    snapshot: watch::Sender<S>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Creates a store with initial state, reducer, and environment.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        let (snapshot, _) = watch::channel(initial_state.clone());

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
            snapshot,
        }
    }

    /// Sends an action through the reducer and executes its effects.
    ///
    /// The transition itself completes before this method returns; the
    /// returned [`EffectHandle`] tracks the spawned async effects, including
    /// the feedback action a resolved fetch sends back.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> EffectHandle {
        metrics::counter!("store.actions.total").increment(1);

        let (handle, tracking) = EffectHandle::new();

        let effects = {
            let mut state = self.state.write().await;

            let start = std::time::Instant::now();
            let effects = self.reducer.reduce(&mut state, action, &self.environment);
            metrics::histogram!("store.reducer.duration_seconds")
                .record(start.elapsed().as_secs_f64());

            // Publish while still holding the lock so observers see every
            // transition in order.
            self.snapshot.send_replace(state.clone());

            effects
        };

        tracing::trace!(count = effects.len(), "executing effects");
        for effect in effects {
            self.execute_effect(effect, tracking.clone());
        }

        handle
    }

    /// Reads the current state via a closure, releasing the lock promptly.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Subscribes to state snapshots.
    ///
    /// The receiver always holds the latest snapshot; a slow observer skips
    /// intermediate states rather than lagging behind.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.snapshot.subscribe()
    }

    fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking) {
        match effect {
            Effect::None => {
                metrics::counter!("store.effects.executed", "type" => "none").increment(1);
            }
            Effect::Future(fut) => {
                metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                tracking.increment();

                let store = self.clone();
                tokio::spawn(async move {
                    let _guard = DecrementGuard(tracking);

                    if let Some(action) = fut.await {
                        tracing::trace!("effect produced an action, feeding back");
                        let _ = store.send(action).await;
                    }
                });
            }
        }
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
            snapshot: self.snapshot.clone(),
        }
    }
}
