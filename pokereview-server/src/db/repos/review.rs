//! Review repository

use sqlx::PgPool;

use crate::models::{NewReview, Review};
use crate::store::{Resource, StoreError};

/// Review repository
pub struct ReviewRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Review>, StoreError> {
        let review = sqlx::query_as(
            "SELECT id, title, content, stars, pokemon_id FROM review WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(review)
    }

    pub async fn list_for_pokemon(&self, pokemon_id: i32) -> Result<Vec<Review>, StoreError> {
        let reviews = sqlx::query_as(
            r#"
            SELECT id, title, content, stars, pokemon_id
            FROM review
            WHERE pokemon_id = $1
            "#,
        )
        .bind(pokemon_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reviews)
    }

    /// Insert a review. A dangling `pokemon_id` is reported as a missing
    /// pokemon rather than a raw constraint error.
    pub async fn create(&self, review: &NewReview) -> Result<Review, StoreError> {
        sqlx::query_as(
            r#"
            INSERT INTO review (title, content, stars, pokemon_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, stars, pokemon_id
            "#,
        )
        .bind(&review.title)
        .bind(&review.content)
        .bind(review.stars)
        .bind(review.pokemon_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StoreError::NotFound {
                    resource: Resource::Pokemon,
                    id: review.pokemon_id,
                }
            }
            other => StoreError::Sqlx(other),
        })
    }

    /// Overwrite title, content and stars. The owner is never rewritten.
    pub async fn update(&self, review: &Review) -> Result<Review, StoreError> {
        sqlx::query_as(
            r#"
            UPDATE review
            SET title = $2, content = $3, stars = $4
            WHERE id = $1
            RETURNING id, title, content, stars, pokemon_id
            "#,
        )
        .bind(review.id)
        .bind(&review.title)
        .bind(&review.content)
        .bind(review.stars)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StoreError::NotFound {
            resource: Resource::Review,
            id: review.id,
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM review WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                resource: Resource::Review,
                id,
            });
        }
        Ok(())
    }
}
