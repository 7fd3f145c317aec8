//! Equality filters applied to collection listings.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::game::Game;

/// Optional equality criteria for listing games.
///
/// A present criterion is a membership test against the record's array-valued
/// field (the record matches when its `genres` contains the given genre), not
/// an equality test on the whole collection. Criteria combine with AND;
/// absent criteria impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GameFilter {
    pub genre: Option<String>,
    pub platform: Option<String>,
}

impl GameFilter {
    /// True when no criterion is set, i.e. the filter selects everything.
    pub fn is_unconstrained(&self) -> bool {
        self.genre.is_none() && self.platform.is_none()
    }

    /// Evaluate the filter against a single record.
    pub fn matches(&self, game: &Game) -> bool {
        let genre_ok = self
            .genre
            .as_ref()
            .is_none_or(|genre| game.genres.iter().any(|g| g == genre));
        let platform_ok = self
            .platform
            .as_ref()
            .is_none_or(|platform| game.platforms.iter().any(|p| p == platform));
        genre_ok && platform_ok
    }
}
