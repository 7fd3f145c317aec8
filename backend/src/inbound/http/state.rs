//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain use-cases and remain testable without I/O.

use crate::domain::GameService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub games: GameService,
}

impl HttpState {
    /// Bundle the collection use-cases for injection into handlers.
    pub fn new(games: GameService) -> Self {
        Self { games }
    }
}
