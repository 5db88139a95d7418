//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: operations either fully apply or fully fail,
/// and the caller gets enough detail to render a user-facing message. Nothing
/// here is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced person, event, or registration id does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An active registration already exists for this person and event.
    #[error("already registered for this event")]
    DuplicateRegistration,

    /// The event has no remaining slots.
    #[error("event is full")]
    CapacityExceeded,

    /// A date string failed the dd-mm-yyyy format rule.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Other malformed input to a creation operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The actor's role lacks the required capability.
    #[error("permission denied: missing '{0}'")]
    PermissionDenied(String),

    /// The actor attempted to delete their own account.
    #[error("cannot delete the currently acting user")]
    SelfDeleteForbidden,

    /// The external store could not be read or written. In-memory state
    /// remains authoritative for the session.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn permission_denied(capability: impl Into<String>) -> Self {
        Self::PermissionDenied(capability.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}
