//! Review endpoints, nested under their pokemon

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath};
use crate::http::server::AppState;
use crate::models::ReviewDto;

/// POST /api/pokemon/{id}/review
async fn create_review(
    State(state): State<Arc<AppState>>,
    ValidPath(pokemon_id): ValidPath<i32>,
    ValidJson(dto): ValidJson<ReviewDto>,
) -> Result<(StatusCode, Json<ReviewDto>), ApiError> {
    let created = state.reviews.create(pokemon_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/pokemon/{id}/reviews
async fn list_reviews(
    State(state): State<Arc<AppState>>,
    ValidPath(pokemon_id): ValidPath<i32>,
) -> Result<Json<Vec<ReviewDto>>, ApiError> {
    Ok(Json(state.reviews.list_by_pokemon_id(pokemon_id).await?))
}

/// GET /api/pokemon/{pokemonId}/review/{id}
async fn get_review(
    State(state): State<Arc<AppState>>,
    ValidPath((pokemon_id, review_id)): ValidPath<(i32, i32)>,
) -> Result<Json<ReviewDto>, ApiError> {
    Ok(Json(state.reviews.get_by_id(review_id, pokemon_id).await?))
}

/// PUT /api/pokemon/{pokemonId}/review/{id}/update
async fn update_review(
    State(state): State<Arc<AppState>>,
    ValidPath((pokemon_id, review_id)): ValidPath<(i32, i32)>,
    ValidJson(dto): ValidJson<ReviewDto>,
) -> Result<Json<ReviewDto>, ApiError> {
    Ok(Json(state.reviews.update(pokemon_id, review_id, dto).await?))
}

/// DELETE /api/pokemon/{pokemonId}/review/{id}/delete
async fn delete_review(
    State(state): State<Arc<AppState>>,
    ValidPath((pokemon_id, review_id)): ValidPath<(i32, i32)>,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.reviews.delete(pokemon_id, review_id).await?;
    Ok((StatusCode::OK, "Review deleted successfully"))
}

/// Review routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/pokemon/{pokemon_id}/review", post(create_review))
        .route("/api/pokemon/{pokemon_id}/reviews", get(list_reviews))
        .route("/api/pokemon/{pokemon_id}/review/{review_id}", get(get_review))
        .route(
            "/api/pokemon/{pokemon_id}/review/{review_id}/update",
            put(update_review),
        )
        .route(
            "/api/pokemon/{pokemon_id}/review/{review_id}/delete",
            delete(delete_review),
        )
}
