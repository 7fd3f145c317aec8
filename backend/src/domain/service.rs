//! Collection use-cases bridging validation, aggregation, and persistence.

use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::domain::error::DomainError;
use crate::domain::filter::GameFilter;
use crate::domain::game::{Game, GameChanges, GameId, NewGame};
use crate::domain::ports::GameRepository;
use crate::domain::stats::{StatsSummary, compute_stats};
use crate::domain::validation::{GameSubmission, ValidGame, validate};

/// Use-case layer over the repository port.
///
/// Each method is an independent request-scoped operation; concurrent writes
/// to the same record resolve to last-write-wins at the store. The service
/// holds no state beyond the injected repository handle.
#[derive(Clone)]
pub struct GameService {
    repository: Arc<dyn GameRepository>,
}

impl GameService {
    /// Create a service backed by the given repository.
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    /// Validate and insert a new record.
    ///
    /// The stored record starts un-favourited with `created_at` and
    /// `modified_at` set to the same instant.
    pub async fn create(&self, submission: GameSubmission) -> Result<Game, DomainError> {
        let valid = validate(submission, Utc::now().year()).map_err(DomainError::Validation)?;
        let ValidGame {
            title,
            genres,
            platforms,
            publisher,
            developer,
            release_year,
            metacritic_score,
            play_hours,
            completed,
        } = valid;
        let now = Utc::now();
        let game = NewGame {
            title,
            genres,
            platforms,
            publisher,
            developer,
            release_year,
            metacritic_score,
            play_hours,
            completed,
            is_favorite: false,
            created_at: now,
            modified_at: now,
        };
        Ok(self.repository.insert(game).await?)
    }

    /// List records matching the equality filters.
    pub async fn list(&self, filter: GameFilter) -> Result<Vec<Game>, DomainError> {
        Ok(self.repository.find(&filter).await?)
    }

    /// Fetch a single record.
    pub async fn fetch(&self, id: &GameId) -> Result<Game, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// Validate and apply a partial replace, refreshing `modified_at`.
    ///
    /// The change set carries no identifier or creation timestamp, so a
    /// client cannot alter either through this path.
    pub async fn update(
        &self,
        id: &GameId,
        submission: GameSubmission,
    ) -> Result<Game, DomainError> {
        let valid = validate(submission, Utc::now().year()).map_err(DomainError::Validation)?;
        let ValidGame {
            title,
            genres,
            platforms,
            publisher,
            developer,
            release_year,
            metacritic_score,
            play_hours,
            completed,
        } = valid;
        let changes = GameChanges {
            title,
            genres,
            platforms,
            publisher,
            developer,
            release_year,
            metacritic_score,
            play_hours,
            completed,
            modified_at: Utc::now(),
        };
        self.repository
            .update(id, changes)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// Hard-delete a record.
    pub async fn remove(&self, id: &GameId) -> Result<(), DomainError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    /// Flip the favourite flag, returning the new value.
    pub async fn toggle_favorite(&self, id: &GameId) -> Result<bool, DomainError> {
        self.repository
            .toggle_favorite(id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    /// Dump the full collection.
    pub async fn export(&self) -> Result<Vec<Game>, DomainError> {
        Ok(self.repository.find(&GameFilter::default()).await?)
    }

    /// Recompute the aggregate summary from a live full scan.
    pub async fn stats(&self) -> Result<StatsSummary, DomainError> {
        let games = self.repository.find(&GameFilter::default()).await?;
        Ok(compute_stats(&games))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::GameId;
    use crate::domain::ports::{GameRepositoryError, MockGameRepository};
    use crate::domain::validation::Violation;
    use rstest::rstest;
    use uuid::Uuid;

    fn submission() -> GameSubmission {
        GameSubmission {
            title: Some("Hollow Knight".to_owned()),
            genres: Some(vec!["Metroidvania".to_owned()]),
            platforms: Some(vec!["PC".to_owned()]),
            ..GameSubmission::default()
        }
    }

    fn stored_from(new_game: &NewGame) -> Game {
        Game {
            id: GameId::from_uuid(Uuid::new_v4()),
            title: new_game.title.clone(),
            genres: new_game.genres.clone(),
            platforms: new_game.platforms.clone(),
            publisher: new_game.publisher.clone(),
            developer: new_game.developer.clone(),
            release_year: new_game.release_year,
            metacritic_score: new_game.metacritic_score,
            play_hours: new_game.play_hours,
            completed: new_game.completed,
            is_favorite: new_game.is_favorite,
            created_at: new_game.created_at,
            modified_at: new_game.modified_at,
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn create_stamps_creation_fields() {
        let mut repository = MockGameRepository::new();
        repository
            .expect_insert()
            .withf(|game| !game.is_favorite && game.created_at == game.modified_at)
            .once()
            .returning(|game| Ok(stored_from(&game)));

        let service = GameService::new(Arc::new(repository));
        let game = service.create(submission()).await.expect("create game");
        assert_eq!(game.title, "Hollow Knight");
        assert!(!game.is_favorite);
        assert_eq!(game.created_at, game.modified_at);
    }

    #[rstest]
    #[actix_web::test]
    async fn create_rejects_invalid_submission_before_touching_the_store() {
        let mut repository = MockGameRepository::new();
        repository.expect_insert().never();

        let service = GameService::new(Arc::new(repository));
        let err = service
            .create(GameSubmission::default())
            .await
            .expect_err("invalid submission");
        match err {
            DomainError::Validation(violations) => {
                assert_eq!(
                    violations,
                    vec![
                        Violation::MissingTitle,
                        Violation::MissingGenres,
                        Violation::MissingPlatforms,
                    ]
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn fetch_maps_missing_record_to_not_found() {
        let mut repository = MockGameRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = GameService::new(Arc::new(repository));
        let id = GameId::from_uuid(Uuid::new_v4());
        assert_eq!(
            service.fetch(&id).await.expect_err("missing"),
            DomainError::NotFound
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn update_refreshes_modified_at_only() {
        let mut repository = MockGameRepository::new();
        repository
            .expect_update()
            .withf(|_, changes| changes.title == "Hollow Knight")
            .once()
            .returning(|id, changes| {
                Ok(Some(Game {
                    id: *id,
                    title: changes.title.clone(),
                    genres: changes.genres.clone(),
                    platforms: changes.platforms.clone(),
                    publisher: changes.publisher.clone(),
                    developer: changes.developer.clone(),
                    release_year: changes.release_year,
                    metacritic_score: changes.metacritic_score,
                    play_hours: changes.play_hours,
                    completed: changes.completed,
                    is_favorite: true,
                    created_at: changes.modified_at,
                    modified_at: changes.modified_at,
                }))
            });

        let service = GameService::new(Arc::new(repository));
        let id = GameId::from_uuid(Uuid::new_v4());
        let game = service.update(&id, submission()).await.expect("update");
        assert_eq!(game.id, id);
    }

    #[rstest]
    #[actix_web::test]
    async fn remove_maps_absent_record_to_not_found() {
        let mut repository = MockGameRepository::new();
        repository.expect_delete().returning(|_| Ok(false));

        let service = GameService::new(Arc::new(repository));
        let id = GameId::from_uuid(Uuid::new_v4());
        assert_eq!(
            service.remove(&id).await.expect_err("missing"),
            DomainError::NotFound
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn toggle_maps_absent_record_to_not_found() {
        let mut repository = MockGameRepository::new();
        repository.expect_toggle_favorite().returning(|_| Ok(None));

        let service = GameService::new(Arc::new(repository));
        let id = GameId::from_uuid(Uuid::new_v4());
        assert_eq!(
            service.toggle_favorite(&id).await.expect_err("missing"),
            DomainError::NotFound
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn repository_failures_pass_through_unchanged() {
        let mut repository = MockGameRepository::new();
        repository
            .expect_find()
            .returning(|_| Err(GameRepositoryError::connection("store down")));

        let service = GameService::new(Arc::new(repository));
        let err = service
            .list(GameFilter::default())
            .await
            .expect_err("store down");
        assert_eq!(
            err,
            DomainError::Repository(GameRepositoryError::connection("store down"))
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn stats_runs_over_the_unconstrained_scan() {
        let mut repository = MockGameRepository::new();
        repository
            .expect_find()
            .withf(GameFilter::is_unconstrained)
            .once()
            .returning(|_| Ok(Vec::new()));

        let service = GameService::new(Arc::new(repository));
        let summary = service.stats().await.expect("stats");
        assert_eq!(summary.total_games, 0);
        assert_eq!(summary.top_genre, crate::domain::stats::NO_TOP_GENRE);
    }
}
