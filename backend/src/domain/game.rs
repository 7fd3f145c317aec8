//! The game record aggregate and its companion write models.
//!
//! Purpose: define the strongly typed collection entry shared by the API and
//! persistence layers. Serialisation is camelCase to match the wire contract;
//! optional fields are omitted from JSON when unset, mirroring how a document
//! store leaves absent fields out of the stored record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Opaque identifier for a stored game record.
///
/// Identifiers are UUID v4 values minted by the repository adapter on insert.
/// Path segments must parse as UUIDs before any repository call; anything else
/// is a [`MalformedGameId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

/// Raised when a path segment does not parse as a game identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed game id: {value}")]
pub struct MalformedGameId {
    /// The rejected path segment.
    pub value: String,
}

impl GameId {
    /// Parse an identifier from its textual path-segment form.
    pub fn parse(value: &str) -> Result<Self, MalformedGameId> {
        Uuid::parse_str(value).map(Self).map_err(|_| MalformedGameId {
            value: value.to_owned(),
        })
    }

    /// Wrap an identifier already minted by a store.
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Borrow the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted entry in the game collection.
///
/// ## Invariants
/// - `genres` and `platforms` are non-empty.
/// - `id` and `created_at` never change after creation.
/// - `modified_at >= created_at`.
/// - `is_favorite` is only mutated through the dedicated toggle operation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[schema(value_type = uuid::Uuid)]
    pub id: GameId,
    pub title: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metacritic_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Validated input for inserting a record; the repository assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
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

/// Validated partial replace for an existing record.
///
/// Optional fields left as `None` keep their stored value. The identifier,
/// creation timestamp, and favourite flag are deliberately absent: a change
/// set cannot express them, so no update can alter them.
#[derive(Debug, Clone, PartialEq)]
pub struct GameChanges {
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
