//! Add-form validation.
//!
//! These guards run in the view layer before an `Add` intent is dispatched;
//! the store itself assumes a pre-validated title. Rejection messages and
//! their order are part of the UI contract.

use thiserror::Error;
use todotable_core::types::TodoState;

/// How the rejection banner should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Red banner, the input is wrong
    Error,
    /// Gray banner, advisory only
    Info,
}

/// Why a submitted title was rejected before dispatch.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// The trimmed title was empty
    #[error("Title can not be empty")]
    EmptyTitle,

    /// Another todo already carries exactly this title
    #[error("Title already exists")]
    DuplicateTitle,

    /// A fetch is in flight; adding now would be overwritten on resolution
    #[error("Please wait for todos to load")]
    StillLoading,
}

impl FormError {
    /// Banner severity for this rejection.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmptyTitle | Self::DuplicateTitle => Severity::Error,
            Self::StillLoading => Severity::Info,
        }
    }
}

/// Validates a raw form submission against the current snapshot.
///
/// Returns the trimmed title ready to dispatch, or the first failing guard
/// in order: empty, duplicate, loading.
///
/// # Errors
///
/// Returns a [`FormError`] when the submission must not be dispatched.
pub fn validate_title(state: &TodoState, raw: &str) -> Result<String, FormError> {
    let title = raw.trim();

    if title.is_empty() {
        return Err(FormError::EmptyTitle);
    }
    if state.has_title(title) {
        return Err(FormError::DuplicateTitle);
    }
    if state.status.is_loading() {
        return Err(FormError::StillLoading);
    }

    Ok(title.to_string())
}
