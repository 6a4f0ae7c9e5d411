//! Repository implementations for database access
//!
//! Each repository borrows the pool and maps sqlx results into
//! [`StoreError`](crate::store::StoreError).

pub mod pokemon;
pub mod review;

pub use pokemon::PokemonRepo;
pub use review::ReviewRepo;
