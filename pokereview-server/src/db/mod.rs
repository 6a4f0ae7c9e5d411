//! Database layer - connection pool, migrations and repositories
//!
//! - Connection pool with a low default limit
//! - One statement per call, or one transaction when a call needs two
//! - Rely on DB constraints (foreign key, cascade) rather than check-then-write

pub mod pool;
pub mod migrations;
pub mod repos;
pub mod store;

pub use pool::PoolSettings;
pub use repos::{PokemonRepo, ReviewRepo};
pub use store::PgStore;
