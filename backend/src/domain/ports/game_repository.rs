//! Port abstraction for game persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::filter::GameFilter;
use crate::domain::game::{Game, GameChanges, GameId, NewGame};

/// Persistence errors raised by game repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameRepositoryError {
    /// Repository connection could not be established.
    #[error("game repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("game repository query failed: {message}")]
    Query { message: String },
}

impl GameRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage operations required by the collection use-cases.
///
/// `find` with an unconstrained filter is the full-collection scan used by
/// export and statistics; adapters must return records in insertion order so
/// aggregation tie-breaks stay deterministic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Insert a record, assigning its identifier.
    async fn insert(&self, game: NewGame) -> Result<Game, GameRepositoryError>;

    /// Fetch records matching the equality filters.
    async fn find(&self, filter: &GameFilter) -> Result<Vec<Game>, GameRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, GameRepositoryError>;

    /// Apply a partial replace; `None` means the record was absent.
    async fn update(
        &self,
        id: &GameId,
        changes: GameChanges,
    ) -> Result<Option<Game>, GameRepositoryError>;

    /// Hard-delete a record; `false` means the record was absent.
    async fn delete(&self, id: &GameId) -> Result<bool, GameRepositoryError>;

    /// Atomically flip the favourite flag, returning the new value.
    ///
    /// Leaves `modified_at` untouched; the flag is independent of the general
    /// update path.
    async fn toggle_favorite(&self, id: &GameId) -> Result<Option<bool>, GameRepositoryError>;
}
