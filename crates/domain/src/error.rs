//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`GarageError`]
//! via `#[from]`. The storage layer wraps its vendor-specific error behind a
//! boxed source so the rest of the workspace never inspects driver errors.

/// Base error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum GarageError {
    /// A required input was missing or empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No row matched the requested identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A unique constraint was violated.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Any other storage failure.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Presence-check failures on incoming requests.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A path identifier could not be parsed.
    #[error("invalid person id: {0}")]
    InvalidId(String),
}

impl ValidationError {
    /// Require `value` to be present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming `field` otherwise.
    pub fn require(field: &'static str, value: Option<String>) -> Result<String, Self> {
        value
            .filter(|v| !v.is_empty())
            .ok_or(Self::MissingField(field))
    }
}

/// No row matched the requested identifier.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity name (`"Person"`, `"Car"`).
    pub entity: &'static str,
    /// The identifier that did not match.
    pub id: String,
}

/// A unique constraint was violated.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unique constraint violated: {detail}")]
pub struct ConflictError {
    /// Store-reported description of the violated constraint.
    pub detail: String,
}
