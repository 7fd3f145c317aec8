//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Game, GameChanges, GameId, NewGame};

use super::schema::games;

/// Full row read back from the `games` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameRow {
    pub id: Uuid,
    pub title: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub publisher: Option<String>,
    pub developer: Option<String>,
    pub release_year: Option<i32>,
    pub metacritic_score: Option<i32>,
    pub play_hours: Option<f64>,
    pub completed: Option<bool>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Self {
            id: GameId::from_uuid(row.id),
            title: row.title,
            genres: row.genres,
            platforms: row.platforms,
            publisher: row.publisher,
            developer: row.developer,
            release_year: row.release_year,
            metacritic_score: row.metacritic_score,
            play_hours: row.play_hours,
            completed: row.completed,
            is_favorite: row.is_favorite,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

/// Insert row; the adapter mints the identifier here.
#[derive(Debug, Insertable)]
#[diesel(table_name = games)]
pub struct NewGameRow {
    pub id: Uuid,
    pub title: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub publisher: Option<String>,
    pub developer: Option<String>,
    pub release_year: Option<i32>,
    pub metacritic_score: Option<i32>,
    pub play_hours: Option<f64>,
    pub completed: Option<bool>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<NewGame> for NewGameRow {
    fn from(game: NewGame) -> Self {
        Self {
            id: Uuid::new_v4(),
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
        }
    }
}

/// Partial replace change set.
///
/// `None` fields are skipped by `AsChangeset`, leaving the stored value
/// untouched. The identifier, creation timestamp, and favourite flag have no
/// column here, so an update can never rewrite them.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = games)]
pub struct GameChangesRow {
    pub title: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub publisher: Option<String>,
    pub developer: Option<String>,
    pub release_year: Option<i32>,
    pub metacritic_score: Option<i32>,
    pub play_hours: Option<f64>,
    pub completed: Option<bool>,
    pub modified_at: DateTime<Utc>,
}

impl From<GameChanges> for GameChangesRow {
    fn from(changes: GameChanges) -> Self {
        Self {
            title: changes.title,
            genres: changes.genres,
            platforms: changes.platforms,
            publisher: changes.publisher,
            developer: changes.developer,
            release_year: changes.release_year,
            metacritic_score: changes.metacritic_score,
            play_hours: changes.play_hours,
            completed: changes.completed,
            modified_at: changes.modified_at,
        }
    }
}
