//! Transition logic for the todo store.
//!
//! [`TodoReducer`] is the whole rulebook: the three-state toggle sort, the
//! idempotent complete/delete mutations, derived id assignment on add, and
//! the three observable phases of the remote fetch. The trickiest part is the
//! sign-flip encoding of the sort direction, kept exactly as specified here.
//!
//! # Sort toggle contract
//!
//! A toggle resolves the direction to *apply* and then stores its complement
//! for the next click:
//!
//! - explicit `order` given: apply `order.flipped()`
//! - same column as the remembered sort: apply the remembered direction
//! - different column: apply ascending
//!
//! After sorting, `sort.order` becomes the complement of the applied
//! direction and `sort.key` becomes the toggled column. Net effect: the first
//! click on a new column sorts ascending and arms the next same-column click
//! to reverse; repeated clicks alternate; switching columns always restarts
//! at the ascending branch regardless of that column's history.

use crate::effect::Effect;
use crate::environment::TodoEnvironment;
use crate::reducer::Reducer;
use crate::types::{LoadStatus, SortConfig, SortKey, SortOrder, Todo, TodoAction, TodoState};
use smallvec::SmallVec;
use std::sync::Arc;

/// Reducer for the todo store.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Sorts the list by `key` and updates the sort config.
    ///
    /// `explicit` is the *previous* direction to invert; `None` falls back to
    /// the remembered direction for the same column, ascending otherwise.
    fn apply_sort(state: &mut TodoState, key: SortKey, explicit: Option<SortOrder>) {
        let applied = match explicit {
            Some(order) => order.flipped(),
            None if state.sort.key == key => state.sort.order,
            None => SortOrder::Ascending,
        };

        // Stable sort with real ties: equal elements keep their relative
        // order, which is what the toggle-twice round trip relies on.
        state.todos.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Id => a.id.cmp(&b.id),
                SortKey::Title => a.title.cmp(&b.title),
                SortKey::Completed => a.completed.cmp(&b.completed),
            };
            match applied {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        state.sort = SortConfig {
            key,
            order: applied.flipped(),
        };
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Load => {
                // Loading becomes visible before the request is even issued.
                state.status = LoadStatus::Loading;

                let source = Arc::clone(&env.source);
                smallvec::smallvec![Effect::future(async move {
                    match source.fetch_todos().await {
                        Ok(todos) => Some(TodoAction::LoadSucceeded { todos }),
                        Err(error) => {
                            tracing::warn!(%error, "todo fetch failed");
                            Some(TodoAction::LoadFailed)
                        }
                    }
                })]
            }

            TodoAction::LoadSucceeded { todos } => {
                // Wholesale replacement: a resolution that raced local edits
                // wins, a known and deliberate lost-update hazard.
                state.todos = todos;
                state.status = LoadStatus::Success;
                SmallVec::new()
            }

            TodoAction::LoadFailed => {
                state.status = LoadStatus::Error;
                SmallVec::new()
            }

            TodoAction::ToggleSort { key, order } => {
                Self::apply_sort(state, key, order);
                SmallVec::new()
            }

            TodoAction::Complete { id } => {
                if let Some(todo) = state.todos.iter_mut().find(|todo| todo.id == id) {
                    todo.completed = true;
                }
                SmallVec::new()
            }

            TodoAction::Delete { id } => {
                state.todos.retain(|todo| todo.id != id);
                SmallVec::new()
            }

            TodoAction::Add { title } => {
                let id = state.next_id();
                state.todos.push(Todo {
                    id,
                    title,
                    completed: false,
                });

                // Re-apply the current sort with the stored direction passed
                // as the explicit previous order: the list re-sorts in the
                // same visible direction and the remembered toggle direction
                // comes out unchanged.
                let SortConfig { key, order } = state.sort;
                Self::apply_sort(state, key, Some(order));
                SmallVec::new()
            }
        }
    }
}
