//! Side effect descriptions.
//!
//! Effects are NOT executed immediately. They are descriptions of what should
//! happen, returned from reducers and executed by the store runtime. The todo
//! engine has exactly one source of side effects, the remote fetch, so the
//! vocabulary is small: either nothing, or an async computation that may feed
//! an action back into the reducer.

use std::future::Future;
use std::pin::Pin;

/// A side effect to be executed by the runtime.
///
/// # Type Parameters
///
/// - `Action`: the action type effects can produce (feedback loop)
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Arbitrary async computation.
    ///
    /// Returns `Option<Action>`: if `Some`, the action is fed back into the
    /// reducer once the future resolves.
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
}

impl<Action> Effect<Action> {
    /// Boxes a future into an [`Effect::Future`].
    pub fn future<F>(fut: F) -> Self
    where
        F: Future<Output = Option<Action>> + Send + 'static,
    {
        Self::Future(Box::pin(fut))
    }

    /// Whether this effect is the no-op.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "Effect::None"),
            Self::Future(_) => write!(f, "Effect::Future(<future>)"),
        }
    }
}
