//! Pokemon repository

use sqlx::PgPool;

use crate::models::{NewPokemon, Page, Pagination, Pokemon};
use crate::store::{Resource, StoreError};

/// Pokemon repository
pub struct PokemonRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PokemonRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: i32) -> Result<Option<Pokemon>, StoreError> {
        let pokemon = sqlx::query_as(r#"SELECT id, name, "type" FROM pokemon WHERE id = $1"#)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(pokemon)
    }

    pub async fn find_by_type(&self, pokemon_type: &str) -> Result<Option<Pokemon>, StoreError> {
        let pokemon = sqlx::query_as(
            r#"
            SELECT id, name, "type"
            FROM pokemon
            WHERE "type" = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(pokemon_type)
        .fetch_optional(self.pool)
        .await?;

        Ok(pokemon)
    }

    /// List a page of pokemon ordered by id.
    ///
    /// Count and slice are read in one transaction so a page past the end
    /// still reports the real total.
    pub async fn list(&self, page: Pagination) -> Result<Page<Pokemon>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pokemon")
            .fetch_one(&mut *tx)
            .await?;

        let items: Vec<Pokemon> = sqlx::query_as(
            r#"
            SELECT id, name, "type"
            FROM pokemon
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Page::new(items, total.0, page))
    }

    pub async fn create(&self, pokemon: &NewPokemon) -> Result<Pokemon, StoreError> {
        let saved = sqlx::query_as(
            r#"
            INSERT INTO pokemon (name, "type")
            VALUES ($1, $2)
            RETURNING id, name, "type"
            "#,
        )
        .bind(&pokemon.name)
        .bind(&pokemon.pokemon_type)
        .fetch_one(self.pool)
        .await?;

        Ok(saved)
    }

    pub async fn update(&self, pokemon: &Pokemon) -> Result<Pokemon, StoreError> {
        sqlx::query_as(
            r#"
            UPDATE pokemon
            SET name = $2, "type" = $3
            WHERE id = $1
            RETURNING id, name, "type"
            "#,
        )
        .bind(pokemon.id)
        .bind(&pokemon.name)
        .bind(&pokemon.pokemon_type)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StoreError::NotFound {
            resource: Resource::Pokemon,
            id: pokemon.id,
        })
    }

    /// Delete a pokemon; its reviews go with it (ON DELETE CASCADE).
    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM pokemon WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                resource: Resource::Pokemon,
                id,
            });
        }
        Ok(())
    }
}
