//! The core trait for transition logic.
//!
//! Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
//! They contain all transition rules and are deterministic and testable; the
//! runtime owns the state, feeds actions through, and executes whatever
//! effects come back.

use crate::effect::Effect;
use smallvec::SmallVec;

/// The Reducer trait - core abstraction for transition logic.
///
/// # Example
///
/// ```
/// use smallvec::SmallVec;
/// use todotable_core::effect::Effect;
/// use todotable_core::reducer::Reducer;
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = i64;
///     type Action = i64;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut i64,
///         action: i64,
///         _env: &(),
///     ) -> SmallVec<[Effect<i64>; 4]> {
///         *state += action;
///         SmallVec::new()
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into state changes and effects.
    ///
    /// Updates state in place and returns effect descriptions to be executed
    /// by the runtime. The update must be total: no partially-applied
    /// transition may ever be observable.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
