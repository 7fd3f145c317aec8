//! Record validation for create and update submissions.
//!
//! The validator is a pure function over the candidate payload and the current
//! calendar year. Every rule is evaluated; all violations are collected and
//! reported together rather than stopping at the first failure. `publisher`
//! and `developer` pass through unchecked — deliberate permissiveness, not an
//! oversight.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Earliest accepted release year.
pub const RELEASE_YEAR_FLOOR: i32 = 1970;

/// Candidate payload for creating or updating a game record.
///
/// Every field is optional at the schema level so that missing required
/// fields surface as validation violations (with the rest of the payload
/// still checked) instead of a deserialisation failure. Unknown JSON fields —
/// including `id`, `createdAt`, and `isFavorite` — are silently ignored;
/// those values are owned by the store and the toggle operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSubmission {
    pub title: Option<String>,
    pub genres: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub developer: Option<String>,
    pub release_year: Option<i32>,
    pub metacritic_score: Option<i32>,
    pub play_hours: Option<f64>,
    pub completed: Option<bool>,
}

/// A single field rule failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingTitle,
    MissingGenres,
    BlankGenre,
    MissingPlatforms,
    BlankPlatform,
    ReleaseYearOutOfRange { current_year: i32 },
    MetacriticScoreOutOfRange,
    NegativePlayHours,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => {
                write!(f, "Title is required and must be a non-empty string.")
            }
            Self::MissingGenres => write!(f, "At least one genre is required."),
            Self::BlankGenre => write!(f, "Genres must be non-empty strings."),
            Self::MissingPlatforms => write!(f, "At least one platform is required."),
            Self::BlankPlatform => write!(f, "Platforms must be non-empty strings."),
            Self::ReleaseYearOutOfRange { current_year } => {
                write!(
                    f,
                    "Release year must be between {RELEASE_YEAR_FLOOR} and {current_year}."
                )
            }
            Self::MetacriticScoreOutOfRange => {
                write!(f, "Metacritic score must be between 0 and 100.")
            }
            Self::NegativePlayHours => write!(f, "Play time must be a positive number."),
        }
    }
}

/// A submission that passed every rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGame {
    pub title: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub publisher: Option<String>,
    pub developer: Option<String>,
    pub release_year: Option<i32>,
    pub metacritic_score: Option<i32>,
    pub play_hours: Option<f64>,
    pub completed: Option<bool>,
}

fn check_sequence(
    values: Option<Vec<String>>,
    missing: Violation,
    blank: Violation,
    violations: &mut Vec<Violation>,
) -> Option<Vec<String>> {
    match values {
        Some(values) if !values.is_empty() => {
            if values.iter().any(|value| value.trim().is_empty()) {
                violations.push(blank);
            }
            Some(values)
        }
        _ => {
            violations.push(missing);
            None
        }
    }
}

/// Check a candidate against every field rule, collecting all violations.
///
/// `current_year` is passed in so the release-year rule stays a pure function
/// of its inputs; callers evaluate it at validation time.
pub fn validate(
    submission: GameSubmission,
    current_year: i32,
) -> Result<ValidGame, Vec<Violation>> {
    let mut violations = Vec::new();

    let title = submission.title.filter(|title| !title.trim().is_empty());
    if title.is_none() {
        violations.push(Violation::MissingTitle);
    }

    let genres = check_sequence(
        submission.genres,
        Violation::MissingGenres,
        Violation::BlankGenre,
        &mut violations,
    );
    let platforms = check_sequence(
        submission.platforms,
        Violation::MissingPlatforms,
        Violation::BlankPlatform,
        &mut violations,
    );

    if let Some(year) = submission.release_year {
        if !(RELEASE_YEAR_FLOOR..=current_year).contains(&year) {
            violations.push(Violation::ReleaseYearOutOfRange { current_year });
        }
    }
    if let Some(score) = submission.metacritic_score {
        if !(0..=100).contains(&score) {
            violations.push(Violation::MetacriticScoreOutOfRange);
        }
    }
    if let Some(hours) = submission.play_hours {
        if hours < 0.0 {
            violations.push(Violation::NegativePlayHours);
        }
    }

    match (title, genres, platforms) {
        (Some(title), Some(genres), Some(platforms)) if violations.is_empty() => Ok(ValidGame {
            title,
            genres,
            platforms,
            publisher: submission.publisher,
            developer: submission.developer,
            release_year: submission.release_year,
            metacritic_score: submission.metacritic_score,
            play_hours: submission.play_hours,
            completed: submission.completed,
        }),
        _ => Err(violations),
    }
}
