//! # Todotable Testing
//!
//! Testing utilities for the todotable state engine:
//!
//! - [`ReducerTest`]: a fluent given/when/then harness for reducer tests
//! - [`assertions`]: helpers for asserting on returned effects
//! - [`source_mocks`]: deterministic [`TodoSource`](todotable_core::TodoSource)
//!   doubles: a canned success, a canned failure, and a gated source whose
//!   in-flight fetches the test resolves by hand
//!
//! ## Example
//!
//! ```
//! use todotable_core::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use todotable_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::detached())
//!     .given_state(TodoState::new())
//!     .when_action(TodoAction::Add { title: "Buy milk".into() })
//!     .then_state(|state| {
//!         assert_eq!(state.todos[0].title, "Buy milk");
//!     })
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod source_mocks;

pub use reducer_test::{ReducerTest, assertions};
pub use source_mocks::{FailingSource, GatedSource, StaticSource};
