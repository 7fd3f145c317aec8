//! Domain primitives and use-cases.
//!
//! Purpose: define the strongly typed game collection entity, its validation
//! and aggregation logic, and the use-case service, all free of transport and
//! storage concerns. Adapters depend on this module, never the reverse.

pub mod error;
pub mod filter;
pub mod game;
pub mod ports;
pub mod service;
pub mod stats;
pub mod validation;

pub use self::error::DomainError;
pub use self::filter::GameFilter;
pub use self::game::{Game, GameChanges, GameId, MalformedGameId, NewGame};
pub use self::service::GameService;
pub use self::stats::{NO_TOP_GENRE, StatsSummary, compute_stats};
pub use self::validation::{GameSubmission, ValidGame, Violation, validate};
