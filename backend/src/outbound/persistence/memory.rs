//! In-memory `GameRepository` used when no database is configured.
//!
//! Records live in a `Vec` behind a lock, preserving insertion order so
//! aggregation tie-breaks behave exactly as they do against the database
//! adapter's `ORDER BY created_at`. Handler tests run against this store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{GameRepository, GameRepositoryError};
use crate::domain::{Game, GameChanges, GameFilter, GameId, NewGame};

/// Process-local game store.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<Vec<Game>>,
}

impl InMemoryGameRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Game>> {
        self.games.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Game>> {
        self.games.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn insert(&self, game: NewGame) -> Result<Game, GameRepositoryError> {
        let stored = Game {
            id: GameId::from_uuid(Uuid::new_v4()),
            title: game.title,
            genres: game.genres,
            platforms: game.platforms,
            publisher: game.publisher,
            developer: game.developer,
            release_year: game.release_year,
            metacritic_score: game.metacritic_score,
            play_hours: game.play_hours,
            completed: game.completed,
            is_favorite: game.is_favorite,
            created_at: game.created_at,
            modified_at: game.modified_at,
        };
        self.write().push(stored.clone());
        Ok(stored)
    }

    async fn find(&self, filter: &GameFilter) -> Result<Vec<Game>, GameRepositoryError> {
        Ok(self
            .read()
            .iter()
            .filter(|game| filter.matches(game))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, GameRepositoryError> {
        Ok(self.read().iter().find(|game| game.id == *id).cloned())
    }

    async fn update(
        &self,
        id: &GameId,
        changes: GameChanges,
    ) -> Result<Option<Game>, GameRepositoryError> {
        let mut games = self.write();
        let Some(game) = games.iter_mut().find(|game| game.id == *id) else {
            return Ok(None);
        };

        game.title = changes.title;
        game.genres = changes.genres;
        game.platforms = changes.platforms;
        // Absent optional fields keep their stored value (partial replace).
        if let Some(publisher) = changes.publisher {
            game.publisher = Some(publisher);
        }
        if let Some(developer) = changes.developer {
            game.developer = Some(developer);
        }
        if let Some(release_year) = changes.release_year {
            game.release_year = Some(release_year);
        }
        if let Some(metacritic_score) = changes.metacritic_score {
            game.metacritic_score = Some(metacritic_score);
        }
        if let Some(play_hours) = changes.play_hours {
            game.play_hours = Some(play_hours);
        }
        if let Some(completed) = changes.completed {
            game.completed = Some(completed);
        }
        game.modified_at = changes.modified_at;

        Ok(Some(game.clone()))
    }

    async fn delete(&self, id: &GameId) -> Result<bool, GameRepositoryError> {
        let mut games = self.write();
        let before = games.len();
        games.retain(|game| game.id != *id);
        Ok(games.len() < before)
    }

    async fn toggle_favorite(&self, id: &GameId) -> Result<Option<bool>, GameRepositoryError> {
        let mut games = self.write();
        let Some(game) = games.iter_mut().find(|game| game.id == *id) else {
            return Ok(None);
        };
        game.is_favorite = !game.is_favorite;
        Ok(Some(game.is_favorite))
    }
}
