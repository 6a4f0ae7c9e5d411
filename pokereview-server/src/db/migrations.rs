//! Schema migrations for the pokemon and review tables
//!
//! Idempotent; run at every startup.

use sqlx::PgPool;

/// Create tables and indexes if missing
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running pokereview migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pokemon (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            "type" TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS review (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            stars INTEGER NOT NULL,
            pokemon_id INTEGER NOT NULL REFERENCES pokemon(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_review_pokemon_id ON review(pokemon_id)")
        .execute(pool)
        .await?;

    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_pokemon_type ON pokemon("type")"#)
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
