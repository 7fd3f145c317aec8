//! PostgreSQL-backed `GameRepository` implementation using Diesel.
//!
//! A thin adapter: every method checks out a pooled connection, runs one
//! statement, and maps rows back to domain entities. The favourite toggle is
//! a single `SET is_favorite = NOT is_favorite ... RETURNING` statement, so
//! concurrent toggles never interleave a stale read with the write.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{GameRepository, GameRepositoryError};
use crate::domain::{Game, GameChanges, GameFilter, GameId, NewGame};

use super::models::{GameChangesRow, GameRow, NewGameRow};
use super::pool::{DbPool, PoolError};
use super::schema::games;

/// Diesel-backed implementation of the `GameRepository` port.
#[derive(Clone)]
pub struct DieselGameRepository {
    pool: DbPool,
}

impl DieselGameRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> GameRepositoryError {
    match error {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            GameRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> GameRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => GameRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            GameRepositoryError::connection("database connection error")
        }
        _ => GameRepositoryError::query("database error"),
    }
}

#[async_trait]
impl GameRepository for DieselGameRepository {
    async fn insert(&self, game: NewGame) -> Result<Game, GameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewGameRow::from(game);
        let stored: GameRow = diesel::insert_into(games::table)
            .values(&row)
            .returning(GameRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(stored.into())
    }

    async fn find(&self, filter: &GameFilter) -> Result<Vec<Game>, GameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Insertion order keeps aggregation tie-breaks deterministic.
        let mut query = games::table
            .select(GameRow::as_select())
            .order(games::created_at.asc())
            .into_boxed();
        if let Some(genre) = &filter.genre {
            query = query.filter(games::genres.contains(vec![genre.clone()]));
        }
        if let Some(platform) = &filter.platform {
            query = query.filter(games::platforms.contains(vec![platform.clone()]));
        }

        let rows: Vec<GameRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, GameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<GameRow> = games::table
            .find(id.as_uuid())
            .select(GameRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Game::from))
    }

    async fn update(
        &self,
        id: &GameId,
        changes: GameChanges,
    ) -> Result<Option<Game>, GameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = GameChangesRow::from(changes);
        let updated: Option<GameRow> = diesel::update(games::table.find(id.as_uuid()))
            .set(&row)
            .returning(GameRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(updated.map(Game::from))
    }

    async fn delete(&self, id: &GameId) -> Result<bool, GameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(games::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn toggle_favorite(&self, id: &GameId) -> Result<Option<bool>, GameRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let flipped: Option<bool> = diesel::update(games::table.find(id.as_uuid()))
            .set(games::is_favorite.eq(diesel::dsl::not(games::is_favorite)))
            .returning(games::is_favorite)
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(flipped)
    }
}
