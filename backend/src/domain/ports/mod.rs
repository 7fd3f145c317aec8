//! Ports connecting the domain to outbound adapters.

mod game_repository;

pub use game_repository::{GameRepository, GameRepositoryError};

#[cfg(test)]
pub use game_repository::MockGameRepository;
