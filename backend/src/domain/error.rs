//! Domain-level error taxonomy.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them to
//! status codes and the `{error}` / `{errors}` response envelopes; nothing in
//! this module knows about HTTP.

use crate::domain::game::MalformedGameId;
use crate::domain::ports::GameRepositoryError;
use crate::domain::validation::Violation;

/// Failure of a collection use-case.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// The submission failed field validation; all violations are carried.
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    /// The targeted record does not exist.
    #[error("game not found")]
    NotFound,

    /// The identifier did not parse; detected before any repository call.
    #[error(transparent)]
    MalformedId(#[from] MalformedGameId),

    /// The underlying store failed; detail is logged, never surfaced.
    #[error(transparent)]
    Repository(#[from] GameRepositoryError),

    /// An adapter-side fault outside the repository (e.g. encoding).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Convenience constructor for [`DomainError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn validation_error_reports_violation_count() {
        let err = DomainError::Validation(vec![Violation::MissingTitle, Violation::MissingGenres]);
        assert_eq!(err.to_string(), "validation failed with 2 violation(s)");
    }

    #[rstest]
    fn repository_error_message_is_transparent() {
        let err = DomainError::from(GameRepositoryError::query("boom"));
        assert_eq!(err.to_string(), "game repository query failed: boom");
    }
}
