//! Domain types for the todotable state engine.
//!
//! The data model is deliberately small: a [`Todo`] record, the
//! [`SortConfig`] that remembers which column toggle comes next, and the
//! [`LoadStatus`] flag tracking the one asynchronous fetch. Everything is
//! owned data so the runtime can hand out cloned snapshots.

use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// `id` is the caller-visible identity and is unique within a store's
/// collection at all times. Deserialization ignores unknown fields, so a
/// remote record carrying extras such as `userId` enters the store already
/// stripped to this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: u64,
    /// Title of the todo
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
}

/// The column a sort applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Sort by `id`
    Id,
    /// Sort by `title`
    Title,
    /// Sort by `completed`
    Completed,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Title => write!(f, "title"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Sort direction, numerically encoded as `+1` / `-1`.
///
/// The stored direction and the direction actually applied by a toggle are
/// complements of each other; see [`crate::todos::TodoReducer`] for the
/// two-phase rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending (`+1`)
    Ascending,
    /// Descending (`-1`)
    Descending,
}

impl SortOrder {
    /// Numeric encoding of this direction.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }

    /// Direction for a numeric sign; non-negative means ascending.
    #[must_use]
    pub const fn from_sign(sign: i8) -> Self {
        if sign >= 0 {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Which column the list was last sorted by, and which direction the next
/// same-column toggle will invert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Column the sort applies to
    pub key: SortKey,
    /// Remembered direction for the next toggle
    pub order: SortOrder,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            key: SortKey::Id,
            order: SortOrder::Descending,
        }
    }
}

/// Fetch lifecycle flag of the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// No fetch has been issued yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch replaced the todo list
    Success,
    /// The last fetch failed; the todo list was left untouched
    Error,
}

impl LoadStatus {
    /// Whether a fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Complete state of the todo store.
///
/// Created as `{ Idle, [], { id, descending } }`, mutated only through the
/// reducer, and never persisted. Observers see cloned snapshots only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// Fetch lifecycle flag
    pub status: LoadStatus,
    /// The todo list, in its current display order
    pub todos: Vec<Todo>,
    /// Sort configuration for the next toggle
    pub sort: SortConfig,
}

impl TodoState {
    /// Creates the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the todo with the given id, if present.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Whether any todo carries exactly this title.
    #[must_use]
    pub fn has_title(&self, title: &str) -> bool {
        self.todos.iter().any(|todo| todo.title == title)
    }

    /// The id the next added todo will receive: `max(existing ids, 0) + 1`.
    ///
    /// Saturates at `u64::MAX` so a hostile remote id cannot wrap the counter.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.todos
            .iter()
            .fold(0, |max, todo| max.max(todo.id))
            .saturating_add(1)
    }
}

/// Every input the todo reducer accepts.
///
/// `Load` is the only action that produces an effect; the paired
/// `LoadSucceeded` / `LoadFailed` actions are fed back by that effect when
/// the fetch resolves. The remaining actions are synchronous transitions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Begin a fetch from the remote source
    Load,
    /// The fetch resolved with a fresh todo list
    LoadSucceeded {
        /// Records already stripped to the [`Todo`] shape
        todos: Vec<Todo>,
    },
    /// The fetch failed (transport error or non-2xx response)
    LoadFailed,
    /// Sort by a column, inverting direction on repeated toggles
    ToggleSort {
        /// Column to sort by
        key: SortKey,
        /// Explicit previous direction to invert, overriding the remembered one
        order: Option<SortOrder>,
    },
    /// Mark a todo as completed; no-op when absent
    Complete {
        /// Todo to complete
        id: u64,
    },
    /// Remove a todo; no-op when absent
    Delete {
        /// Todo to delete
        id: u64,
    },
    /// Append a todo with a derived id and re-apply the current sort
    Add {
        /// Pre-validated title
        title: String,
    },
}
