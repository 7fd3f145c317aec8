//! Collection-wide statistics.
//!
//! The summary is recomputed from a full scan on every request; nothing is
//! cached or maintained incrementally. The top-genre count is a single
//! explicit pass over the flattened genre multiset in record iteration order:
//! a genre takes the lead only by strictly exceeding the running maximum, so
//! ties resolve to whichever genre reached the winning count first.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::game::Game;

/// Sentinel reported when the collection holds no genres at all.
pub const NO_TOP_GENRE: &str = "N/A";

/// Aggregate summary of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_games: usize,
    pub total_play_time: f64,
    /// Mean score over the records that carry one, rounded to one decimal.
    pub average_metacritic: f64,
    pub completed_games: usize,
    pub top_genre: String,
}

impl StatsSummary {
    /// The well-defined result for an empty collection.
    pub fn empty() -> Self {
        Self {
            total_games: 0,
            total_play_time: 0.0,
            average_metacritic: 0.0,
            completed_games: 0,
            top_genre: NO_TOP_GENRE.to_owned(),
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the summary over the full record set.
pub fn compute_stats(games: &[Game]) -> StatsSummary {
    if games.is_empty() {
        return StatsSummary::empty();
    }

    let total_play_time: f64 = games.iter().filter_map(|game| game.play_hours).sum();

    let (score_sum, score_count) = games
        .iter()
        .filter_map(|game| game.metacritic_score)
        .fold((0_i64, 0_u32), |(sum, count), score| {
            (sum + i64::from(score), count + 1)
        });
    let average_metacritic = if score_count == 0 {
        0.0
    } else {
        round_to_tenth(score_sum as f64 / f64::from(score_count))
    };

    let completed_games = games
        .iter()
        .filter(|game| game.completed == Some(true))
        .count();

    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut top_genre: Option<&str> = None;
    let mut max_count = 0_u32;
    for genre in games.iter().flat_map(|game| game.genres.iter()) {
        let count = counts.entry(genre.as_str()).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            top_genre = Some(genre);
        }
    }

    StatsSummary {
        total_games: games.len(),
        total_play_time,
        average_metacritic,
        completed_games,
        top_genre: top_genre.map_or_else(|| NO_TOP_GENRE.to_owned(), ToOwned::to_owned),
    }
}
