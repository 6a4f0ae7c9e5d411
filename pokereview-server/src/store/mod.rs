//! Storage interface consumed by the services
//!
//! Two capability sets, one per table. Implementations:
//! - [`MemoryStore`]: in-process arena, used by tests and `serve --memory`
//! - [`crate::db::PgStore`]: PostgreSQL via sqlx
//!
//! Both guarantee:
//! - Ids are generated by the store on insert
//! - Reviews reference an existing pokemon (insert fails otherwise)
//! - Deleting a pokemon deletes its reviews

pub mod memory;

use std::fmt;

use async_trait::async_trait;

use crate::models::{NewPokemon, NewReview, Page, Pagination, Pokemon, Review};

pub use memory::MemoryStore;

/// Table a missing row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Pokemon,
    Review,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pokemon => write!(f, "pokemon"),
            Self::Review => write!(f, "review"),
        }
    }
}

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: Resource, id: i32 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations over the `pokemon` table
#[async_trait]
pub trait PokemonStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Pokemon>>;

    /// First pokemon (lowest id) with the given type.
    async fn find_by_type(&self, pokemon_type: &str) -> StoreResult<Option<Pokemon>>;

    /// Page of pokemon ordered by id.
    async fn list(&self, page: Pagination) -> StoreResult<Page<Pokemon>>;

    async fn insert(&self, pokemon: NewPokemon) -> StoreResult<Pokemon>;

    /// Overwrite name and type of an existing row.
    async fn update(&self, pokemon: Pokemon) -> StoreResult<Pokemon>;

    async fn delete(&self, id: i32) -> StoreResult<()>;

    /// Round-trip to the backing store. Used by the health check.
    async fn ping(&self) -> StoreResult<()>;
}

/// Persistence operations over the `review` table
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Review>>;

    /// All reviews whose foreign key equals `pokemon_id`, in no guaranteed order.
    async fn find_by_pokemon_id(&self, pokemon_id: i32) -> StoreResult<Vec<Review>>;

    /// Fails with `NotFound { resource: Resource::Pokemon }` if the owner doesn't exist.
    async fn insert(&self, review: NewReview) -> StoreResult<Review>;

    /// Overwrite title, content and stars of an existing row.
    async fn update(&self, review: Review) -> StoreResult<Review>;

    async fn delete(&self, id: i32) -> StoreResult<()>;
}
