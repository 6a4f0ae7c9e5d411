//! Review record and transfer shape

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub stars: i32,
    /// Owning pokemon (foreign key)
    pub pokemon_id: i32,
}

/// Review not yet persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub title: String,
    pub content: String,
    pub stars: i32,
    pub pokemon_id: i32,
}

/// Flat JSON projection of a review
///
/// `id` and `pokemonId` are ignored on input: the store assigns the id and
/// the owner always comes from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(default)]
    pub id: i32,
    pub title: String,
    pub content: String,
    pub stars: i32,
    #[serde(default)]
    pub pokemon_id: i32,
}

impl ReviewDto {
    /// Build an insertable review owned by `pokemon_id`.
    pub fn into_new(self, pokemon_id: i32) -> NewReview {
        NewReview {
            title: self.title,
            content: self.content,
            stars: self.stars,
            pokemon_id,
        }
    }
}

impl From<Review> for ReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            title: r.title,
            content: r.content,
            stars: r.stars,
            pokemon_id: r.pokemon_id,
        }
    }
}
