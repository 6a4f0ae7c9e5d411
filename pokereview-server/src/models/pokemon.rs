//! Pokemon record and transfer shapes

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Page;

/// Pokemon record from the store
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub pokemon_type: String,
}

/// Pokemon not yet persisted (no identity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPokemon {
    pub name: String,
    pub pokemon_type: String,
}

/// Flat JSON projection of a pokemon
///
/// `id` is ignored on input; the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub pokemon_type: String,
}

impl PokemonDto {
    /// Drop the identity, producing an insertable record.
    pub fn into_new(self) -> NewPokemon {
        NewPokemon {
            name: self.name,
            pokemon_type: self.pokemon_type,
        }
    }
}

impl From<Pokemon> for PokemonDto {
    fn from(p: Pokemon) -> Self {
        Self {
            id: p.id,
            name: p.name,
            pokemon_type: p.pokemon_type,
        }
    }
}

/// Page envelope for `GET /api/pokemon`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonResponse {
    pub content: Vec<PokemonDto>,
    pub page_no: u32,
    pub page_size: u32,
    pub total_elements: i64,
    pub total_pages: u32,
    pub last: bool,
}

impl From<Page<PokemonDto>> for PokemonResponse {
    fn from(page: Page<PokemonDto>) -> Self {
        let total_pages = page.total_pages();
        let last = page.is_last();
        Self {
            content: page.items,
            page_no: page.page_no,
            page_size: page.page_size,
            total_elements: page.total,
            total_pages,
            last,
        }
    }
}
