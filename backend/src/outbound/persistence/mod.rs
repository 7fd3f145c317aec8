//! Persistence adapters for the game repository port.
//!
//! The primary adapter is PostgreSQL via the Diesel ORM with async support
//! through `diesel-async` and `bb8` connection pooling. Diesel row structs
//! (`models.rs`) and schema definitions (`schema.rs`) are internal
//! implementation details, never exposed to the domain layer. An in-memory
//! store backs deployments without a configured database and the handler
//! tests.

mod diesel_game_repository;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_game_repository::DieselGameRepository;
pub use memory::InMemoryGameRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
