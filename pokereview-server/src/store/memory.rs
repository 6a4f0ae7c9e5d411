//! In-process store
//!
//! Arena of records keyed by generated integer ids. Reviews carry an
//! explicit `pokemon_id`; there are no back-pointers from pokemon to
//! reviews, the "reviews of a pokemon" view is always a scan.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PokemonStore, Resource, ReviewStore, StoreError, StoreResult};
use crate::models::{NewPokemon, NewReview, Page, Pagination, Pokemon, Review};

#[derive(Debug, Default)]
struct Arena {
    pokemon: BTreeMap<i32, Pokemon>,
    reviews: BTreeMap<i32, Review>,
    last_pokemon_id: i32,
    last_review_id: i32,
}

/// Memory-backed implementation of both store traits
#[derive(Debug, Default)]
pub struct MemoryStore {
    arena: RwLock<Arena>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PokemonStore for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Pokemon>> {
        Ok(self.arena.read().await.pokemon.get(&id).cloned())
    }

    async fn find_by_type(&self, pokemon_type: &str) -> StoreResult<Option<Pokemon>> {
        let arena = self.arena.read().await;
        Ok(arena
            .pokemon
            .values()
            .find(|p| p.pokemon_type == pokemon_type)
            .cloned())
    }

    async fn list(&self, page: Pagination) -> StoreResult<Page<Pokemon>> {
        let arena = self.arena.read().await;
        let items = arena
            .pokemon
            .values()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, arena.pokemon.len() as i64, page))
    }

    async fn insert(&self, pokemon: NewPokemon) -> StoreResult<Pokemon> {
        let mut arena = self.arena.write().await;
        arena.last_pokemon_id += 1;
        let saved = Pokemon {
            id: arena.last_pokemon_id,
            name: pokemon.name,
            pokemon_type: pokemon.pokemon_type,
        };
        arena.pokemon.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, pokemon: Pokemon) -> StoreResult<Pokemon> {
        let mut arena = self.arena.write().await;
        let slot = arena.pokemon.get_mut(&pokemon.id).ok_or(StoreError::NotFound {
            resource: Resource::Pokemon,
            id: pokemon.id,
        })?;
        *slot = pokemon.clone();
        Ok(pokemon)
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut arena = self.arena.write().await;
        if arena.pokemon.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                resource: Resource::Pokemon,
                id,
            });
        }
        arena.reviews.retain(|_, r| r.pokemon_id != id);
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn find_by_id(&self, id: i32) -> StoreResult<Option<Review>> {
        Ok(self.arena.read().await.reviews.get(&id).cloned())
    }

    async fn find_by_pokemon_id(&self, pokemon_id: i32) -> StoreResult<Vec<Review>> {
        let arena = self.arena.read().await;
        Ok(arena
            .reviews
            .values()
            .filter(|r| r.pokemon_id == pokemon_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, review: NewReview) -> StoreResult<Review> {
        let mut arena = self.arena.write().await;
        if !arena.pokemon.contains_key(&review.pokemon_id) {
            return Err(StoreError::NotFound {
                resource: Resource::Pokemon,
                id: review.pokemon_id,
            });
        }

        arena.last_review_id += 1;
        let saved = Review {
            id: arena.last_review_id,
            title: review.title,
            content: review.content,
            stars: review.stars,
            pokemon_id: review.pokemon_id,
        };
        arena.reviews.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, review: Review) -> StoreResult<Review> {
        let mut arena = self.arena.write().await;
        let slot = arena.reviews.get_mut(&review.id).ok_or(StoreError::NotFound {
            resource: Resource::Review,
            id: review.id,
        })?;
        // Ownership is fixed at insert
        slot.title = review.title;
        slot.content = review.content;
        slot.stars = review.stars;
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        let mut arena = self.arena.write().await;
        arena
            .reviews
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound {
                resource: Resource::Review,
                id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> NewPokemon {
        NewPokemon {
            name: "pikachu".into(),
            pokemon_type: "electric".into(),
        }
    }

    fn review_for(pokemon_id: i32, title: &str) -> NewReview {
        NewReview {
            title: title.into(),
            content: "content".into(),
            stars: 5,
            pokemon_id,
        }
    }

    #[tokio::test]
    async fn insert_generates_increasing_ids() {
        let store = MemoryStore::new();
        let first = PokemonStore::insert(&store, pikachu()).await.unwrap();
        let second = PokemonStore::insert(&store, pikachu()).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn find_by_type_hits_and_misses() {
        let store = MemoryStore::new();
        PokemonStore::insert(&store, pikachu()).await.unwrap();

        let found = store.find_by_type("electric").await.unwrap();
        assert_eq!(found.map(|p| p.name), Some("pikachu".to_string()));

        assert!(store.find_by_type("hybrid").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_then_find_is_none() {
        let store = MemoryStore::new();
        let saved = PokemonStore::insert(&store, pikachu()).await.unwrap();

        PokemonStore::delete(&store, saved.id).await.unwrap();

        assert!(PokemonStore::find_by_id(&store, saved.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn deleting_pokemon_drops_its_reviews() {
        let store = MemoryStore::new();
        let keep = PokemonStore::insert(&store, pikachu()).await.unwrap();
        let gone = PokemonStore::insert(&store, pikachu()).await.unwrap();
        ReviewStore::insert(&store, review_for(keep.id, "kept")).await.unwrap();
        let orphan = ReviewStore::insert(&store, review_for(gone.id, "orphan"))
            .await
            .unwrap();

        PokemonStore::delete(&store, gone.id).await.unwrap();

        assert!(ReviewStore::find_by_id(&store, orphan.id).await.unwrap().is_none());
        assert_eq!(store.find_by_pokemon_id(keep.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn review_insert_requires_existing_pokemon() {
        let store = MemoryStore::new();
        let err = ReviewStore::insert(&store, review_for(99, "t"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                resource: Resource::Pokemon,
                id: 99
            }
        ));
    }

    #[tokio::test]
    async fn review_update_keeps_owner() {
        let store = MemoryStore::new();
        let owner = PokemonStore::insert(&store, pikachu()).await.unwrap();
        let mut review = ReviewStore::insert(&store, review_for(owner.id, "before"))
            .await
            .unwrap();

        review.title = "after".into();
        review.pokemon_id = owner.id + 1;
        let updated = ReviewStore::update(&store, review).await.unwrap();

        assert_eq!(updated.title, "after");
        assert_eq!(updated.pokemon_id, owner.id);
    }

    #[tokio::test]
    async fn list_pages_in_id_order() {
        let store = MemoryStore::new();
        for i in 0..5 {
            PokemonStore::insert(
                &store,
                NewPokemon {
                    name: format!("mon{}", i),
                    pokemon_type: "normal".into(),
                },
            )
            .await
            .unwrap();
        }

        let page = store.list(Pagination::new(1, 2)).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["mon2", "mon3"]);
        assert_eq!(page.total, 5);

        let past_end = store.list(Pagination::new(9, 2)).await.unwrap();
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 5);
    }
}
