//! Services: domain operations over the store traits
//!
//! Services are wired explicitly with the stores they use and are cheap to
//! clone (they hold `Arc`s).

pub mod pokemon;
pub mod review;

use crate::store::{Resource, StoreError};

pub use pokemon::PokemonService;
pub use review::ReviewService;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Pokemon could not be found")]
    PokemonNotFound { id: i32 },

    #[error("Pokemon of type '{pokemon_type}' could not be found")]
    PokemonTypeNotFound { pokemon_type: String },

    /// Review is missing, or exists under a different pokemon
    #[error("Review with associated pokemon not found")]
    ReviewNotFound { review_id: i32, pokemon_id: i32 },

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            // Row vanished between lookup and write
            StoreError::NotFound {
                resource: Resource::Pokemon,
                id,
            } => Self::PokemonNotFound { id },
            other => Self::Store(other),
        }
    }
}
