//! Domain models: persisted records and their transfer shapes
//!
//! Records (`Pokemon`, `Review`) are what the store hands back.
//! Dtos are the flat JSON projections used at the HTTP boundary.

pub mod validation;
pub mod pokemon;
pub mod review;
pub mod pagination;

pub use validation::ValidationError;
pub use pokemon::{NewPokemon, Pokemon, PokemonDto, PokemonResponse};
pub use review::{NewReview, Review, ReviewDto};
pub use pagination::{Page, Pagination, PaginationParams};
