//! Review service
//!
//! Every access through a `(pokemon_id, review_id)` pair verifies that the
//! review belongs to that pokemon, not just that both ids exist.

use std::sync::Arc;

use crate::models::{Pokemon, Review, ReviewDto};
use crate::store::{PokemonStore, Resource, ReviewStore, StoreError};

use super::{ServiceError, ServiceResult};

/// CRUD over reviews, scoped under their parent pokemon
#[derive(Clone)]
pub struct ReviewService {
    pokemon: Arc<dyn PokemonStore>,
    reviews: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(pokemon: Arc<dyn PokemonStore>, reviews: Arc<dyn ReviewStore>) -> Self {
        Self { pokemon, reviews }
    }

    /// Create a review owned by `pokemon_id`; the body's `pokemonId` is ignored.
    pub async fn create(&self, pokemon_id: i32, dto: ReviewDto) -> ServiceResult<ReviewDto> {
        let pokemon = self.fetch_pokemon(pokemon_id).await?;
        let saved = self.reviews.insert(dto.into_new(pokemon.id)).await?;
        tracing::debug!(review_id = saved.id, pokemon_id, "review created");
        Ok(saved.into())
    }

    /// Reviews whose foreign key is `pokemon_id`. The pokemon itself need not exist.
    pub async fn list_by_pokemon_id(&self, pokemon_id: i32) -> ServiceResult<Vec<ReviewDto>> {
        let reviews = self.reviews.find_by_pokemon_id(pokemon_id).await?;
        Ok(reviews.into_iter().map(ReviewDto::from).collect())
    }

    pub async fn get_by_id(&self, review_id: i32, pokemon_id: i32) -> ServiceResult<ReviewDto> {
        Ok(self.fetch_owned(pokemon_id, review_id).await?.into())
    }

    /// Overwrite title, content and stars. Stars are stored as given.
    pub async fn update(
        &self,
        pokemon_id: i32,
        review_id: i32,
        dto: ReviewDto,
    ) -> ServiceResult<ReviewDto> {
        let mut review = self.fetch_owned(pokemon_id, review_id).await?;
        review.title = dto.title;
        review.content = dto.content;
        review.stars = dto.stars;

        let updated = self
            .reviews
            .update(review)
            .await
            .map_err(|e| not_found_as_review(e, review_id, pokemon_id))?;
        tracing::debug!(review_id, pokemon_id, "review updated");
        Ok(updated.into())
    }

    pub async fn delete(&self, pokemon_id: i32, review_id: i32) -> ServiceResult<()> {
        let review = self.fetch_owned(pokemon_id, review_id).await?;
        self.reviews
            .delete(review.id)
            .await
            .map_err(|e| not_found_as_review(e, review_id, pokemon_id))?;
        tracing::debug!(review_id, pokemon_id, "review deleted");
        Ok(())
    }

    async fn fetch_pokemon(&self, id: i32) -> ServiceResult<Pokemon> {
        self.pokemon
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::PokemonNotFound { id })
    }

    /// Parent first, then review, then the ownership cross-check.
    async fn fetch_owned(&self, pokemon_id: i32, review_id: i32) -> ServiceResult<Review> {
        let pokemon = self.fetch_pokemon(pokemon_id).await?;

        let review = self
            .reviews
            .find_by_id(review_id)
            .await?
            .ok_or(ServiceError::ReviewNotFound {
                review_id,
                pokemon_id,
            })?;

        if review.pokemon_id != pokemon.id {
            tracing::debug!(
                review_id,
                pokemon_id,
                owner = review.pokemon_id,
                "review belongs to a different pokemon"
            );
            return Err(ServiceError::ReviewNotFound {
                review_id,
                pokemon_id,
            });
        }

        Ok(review)
    }
}

/// A review that vanished between lookup and write is still a missing review.
fn not_found_as_review(e: StoreError, review_id: i32, pokemon_id: i32) -> ServiceError {
    match e {
        StoreError::NotFound {
            resource: Resource::Review, ..
        } => ServiceError::ReviewNotFound {
            review_id,
            pokemon_id,
        },
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPokemon;
    use crate::store::MemoryStore;

    struct Fixture {
        store: Arc<MemoryStore>,
        service: ReviewService,
    }

    impl Fixture {
        fn new() -> Self {
            let store = Arc::new(MemoryStore::new());
            let service = ReviewService::new(store.clone(), store.clone());
            Self { store, service }
        }

        async fn pokemon(&self, name: &str) -> i32 {
            PokemonStore::insert(
                self.store.as_ref(),
                NewPokemon {
                    name: name.into(),
                    pokemon_type: "electric".into(),
                },
            )
            .await
            .unwrap()
            .id
        }
    }

    fn dto(title: &str, stars: i32) -> ReviewDto {
        ReviewDto {
            id: 0,
            title: title.into(),
            content: "content".into(),
            stars,
            pokemon_id: 0,
        }
    }

    #[tokio::test]
    async fn create_sets_owner_from_path() {
        let fx = Fixture::new();
        let owner = fx.pokemon("pikachu").await;
        let other = fx.pokemon("raichu").await;

        let mut input = dto("t", 5);
        input.pokemon_id = other;
        let created = fx.service.create(owner, input).await.unwrap();

        assert_eq!(created.pokemon_id, owner);
        assert_eq!(created.title, "t");
        assert_eq!(created.stars, 5);
    }

    #[tokio::test]
    async fn create_under_missing_pokemon_fails() {
        let fx = Fixture::new();
        let err = fx.service.create(3, dto("t", 5)).await.unwrap_err();
        assert!(matches!(err, ServiceError::PokemonNotFound { id: 3 }));
    }

    #[tokio::test]
    async fn list_returns_only_that_pokemons_reviews() {
        let fx = Fixture::new();
        let a = fx.pokemon("a").await;
        let b = fx.pokemon("b").await;
        fx.service.create(a, dto("a1", 5)).await.unwrap();
        fx.service.create(a, dto("a2", 4)).await.unwrap();
        fx.service.create(b, dto("b1", 3)).await.unwrap();

        let mut titles: Vec<_> = fx
            .service
            .list_by_pokemon_id(a)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn list_does_not_require_pokemon() {
        let fx = Fixture::new();
        let reviews = fx.service.list_by_pokemon_id(404).await.unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn get_by_id_returns_review() {
        let fx = Fixture::new();
        let owner = fx.pokemon("pikachu").await;
        let created = fx.service.create(owner, dto("title", 5)).await.unwrap();

        let fetched = fx.service.get_by_id(created.id, owner).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn missing_pokemon_checked_before_review() {
        let fx = Fixture::new();
        let owner = fx.pokemon("pikachu").await;
        let created = fx.service.create(owner, dto("t", 5)).await.unwrap();

        // Review exists, parent doesn't
        assert!(matches!(
            fx.service.get_by_id(created.id, 2).await,
            Err(ServiceError::PokemonNotFound { id: 2 })
        ));
        assert!(matches!(
            fx.service.update(2, created.id, dto("x", 1)).await,
            Err(ServiceError::PokemonNotFound { id: 2 })
        ));
        assert!(matches!(
            fx.service.delete(2, created.id).await,
            Err(ServiceError::PokemonNotFound { id: 2 })
        ));

        // Neither exists: still the pokemon error
        assert!(matches!(
            fx.service.get_by_id(50, 60).await,
            Err(ServiceError::PokemonNotFound { id: 60 })
        ));
    }

    #[tokio::test]
    async fn missing_review_is_review_not_found() {
        let fx = Fixture::new();
        let owner = fx.pokemon("pikachu").await;

        let err = fx.service.get_by_id(2, owner).await.unwrap_err();
        assert!(matches!(err, ServiceError::ReviewNotFound { review_id: 2, .. }));

        let err = fx.service.update(owner, 2, dto("x", 1)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::ReviewNotFound {
                review_id: 2,
                pokemon_id
            } if pokemon_id == owner
        ));

        let err = fx.service.delete(owner, 2).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::ReviewNotFound {
                review_id: 2,
                pokemon_id
            } if pokemon_id == owner
        ));

        // Nothing was created as a side effect
        assert!(fx.service.list_by_pokemon_id(owner).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cross_parent_access_is_review_not_found() {
        let fx = Fixture::new();
        let pikachu = fx.pokemon("pikachu").await;
        let raichu = fx.pokemon("raichu").await;
        assert_eq!(pikachu, 1);

        let review = fx.service.create(pikachu, dto("t", 5)).await.unwrap();
        assert_eq!(review.pokemon_id, 1);

        assert!(matches!(
            fx.service.get_by_id(review.id, raichu).await,
            Err(ServiceError::ReviewNotFound { .. })
        ));
        assert!(matches!(
            fx.service.update(raichu, review.id, dto("hijack", 1)).await,
            Err(ServiceError::ReviewNotFound { .. })
        ));
        assert!(matches!(
            fx.service.delete(raichu, review.id).await,
            Err(ServiceError::ReviewNotFound { .. })
        ));

        // Untouched under the real owner
        let still = fx.service.get_by_id(review.id, pikachu).await.unwrap();
        assert_eq!(still.title, "t");
    }

    #[tokio::test]
    async fn update_overwrites_fields_without_range_check() {
        let fx = Fixture::new();
        let owner = fx.pokemon("pikachu").await;
        let created = fx.service.create(owner, dto("before", 5)).await.unwrap();

        let mut changes = dto("after", 42);
        changes.content = "new content".into();
        changes.pokemon_id = 999;
        let updated = fx.service.update(owner, created.id, changes).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.content, "new content");
        assert_eq!(updated.stars, 42);
        assert_eq!(updated.pokemon_id, owner);
    }

    #[tokio::test]
    async fn delete_removes_review() {
        let fx = Fixture::new();
        let owner = fx.pokemon("pikachu").await;
        let created = fx.service.create(owner, dto("t", 5)).await.unwrap();

        fx.service.delete(owner, created.id).await.unwrap();

        assert!(matches!(
            fx.service.get_by_id(created.id, owner).await,
            Err(ServiceError::ReviewNotFound { .. })
        ));
        assert!(fx.service.list_by_pokemon_id(owner).await.unwrap().is_empty());
    }
}
