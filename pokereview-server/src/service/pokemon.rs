//! Pokemon service

use std::sync::Arc;

use crate::models::{Pagination, Pokemon, PokemonDto, PokemonResponse};
use crate::store::PokemonStore;

use super::{ServiceError, ServiceResult};

/// CRUD and paginated listing over pokemon
#[derive(Clone)]
pub struct PokemonService {
    store: Arc<dyn PokemonStore>,
}

impl PokemonService {
    pub fn new(store: Arc<dyn PokemonStore>) -> Self {
        Self { store }
    }

    /// Persist a new pokemon; any id in `dto` is ignored.
    pub async fn create(&self, dto: PokemonDto) -> ServiceResult<PokemonDto> {
        let saved = self.store.insert(dto.into_new()).await?;
        tracing::debug!(id = saved.id, "pokemon created");
        Ok(saved.into())
    }

    /// Check the backing store answers.
    pub async fn ping(&self) -> ServiceResult<()> {
        Ok(self.store.ping().await?)
    }

    /// Zero-based page of pokemon ordered by id.
    pub async fn list(&self, page: Pagination) -> ServiceResult<PokemonResponse> {
        let page = self.store.list(page).await?;
        Ok(page.map(PokemonDto::from).into())
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<PokemonDto> {
        Ok(self.fetch(id).await?.into())
    }

    /// First pokemon with the given type.
    pub async fn find_by_type(&self, pokemon_type: &str) -> ServiceResult<PokemonDto> {
        self.store
            .find_by_type(pokemon_type)
            .await?
            .map(PokemonDto::from)
            .ok_or_else(|| ServiceError::PokemonTypeNotFound {
                pokemon_type: pokemon_type.to_owned(),
            })
    }

    /// Overwrite name and type. The id always comes from `id`, never from `dto`.
    pub async fn update(&self, dto: PokemonDto, id: i32) -> ServiceResult<PokemonDto> {
        let mut pokemon = self.fetch(id).await?;
        pokemon.name = dto.name;
        pokemon.pokemon_type = dto.pokemon_type;

        let updated = self.store.update(pokemon).await?;
        tracing::debug!(id, "pokemon updated");
        Ok(updated.into())
    }

    pub async fn delete_by_id(&self, id: i32) -> ServiceResult<()> {
        let pokemon = self.fetch(id).await?;
        self.store.delete(pokemon.id).await?;
        tracing::debug!(id, "pokemon deleted");
        Ok(())
    }

    async fn fetch(&self, id: i32) -> ServiceResult<Pokemon> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::PokemonNotFound { id })
    }
}
