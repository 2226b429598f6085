//! # Todotable Core
//!
//! Domain model and reducer for the todotable state engine.
//!
//! A todo list is fetched once from a remote REST source and then mutated
//! locally: sort by column, add, complete, delete. All of that logic lives in
//! [`todos::TodoReducer`], a pure function over [`types::TodoState`]. The only
//! side effect in the whole system is the fetch itself, which the reducer
//! describes as an [`effect::Effect::Future`] and leaves for the runtime to
//! execute.
//!
//! ## Core Concepts
//!
//! - **State**: [`types::TodoState`], the todo list, the sort configuration,
//!   and the fetch lifecycle flag
//! - **Action**: [`types::TodoAction`], every input the reducer accepts
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies, here the [`environment::TodoSource`]
//!
//! ## Example
//!
//! ```
//! use todotable_core::reducer::Reducer;
//! use todotable_core::todos::TodoReducer;
//! use todotable_core::types::{SortKey, TodoAction, TodoState};
//!
//! let mut state = TodoState::default();
//! let env = todotable_core::environment::TodoEnvironment::detached();
//!
//! TodoReducer.reduce(&mut state, TodoAction::Add { title: "Buy milk".into() }, &env);
//! TodoReducer.reduce(&mut state, TodoAction::ToggleSort { key: SortKey::Title, order: None }, &env);
//!
//! assert_eq!(state.todos[0].title, "Buy milk");
//! ```

pub use smallvec::SmallVec;

pub mod effect;
pub mod environment;
pub mod reducer;
pub mod todos;
pub mod types;

pub use effect::Effect;
pub use environment::{SourceError, TodoEnvironment, TodoSource};
pub use reducer::Reducer;
pub use todos::TodoReducer;
pub use types::{LoadStatus, SortConfig, SortKey, SortOrder, Todo, TodoAction, TodoState};
