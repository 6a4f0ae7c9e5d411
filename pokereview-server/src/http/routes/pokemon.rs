//! Pokemon endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::http::server::AppState;
use crate::models::{Pagination, PaginationParams, PokemonDto, PokemonResponse};

/// POST /api/pokemon/create
async fn create_pokemon(
    State(state): State<Arc<AppState>>,
    ValidJson(dto): ValidJson<PokemonDto>,
) -> Result<(StatusCode, Json<PokemonDto>), ApiError> {
    let created = state.pokemon.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/pokemon?pageNo=&pageSize= - zero-based page
async fn list_pokemon(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> Result<Json<PokemonResponse>, ApiError> {
    let page = Pagination::from(params);
    Ok(Json(state.pokemon.list(page).await?))
}

/// GET /api/pokemon/{id}
async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<PokemonDto>, ApiError> {
    Ok(Json(state.pokemon.get_by_id(id).await?))
}

/// GET /api/pokemon/type/{type}
async fn get_pokemon_by_type(
    State(state): State<Arc<AppState>>,
    ValidPath(pokemon_type): ValidPath<String>,
) -> Result<Json<PokemonDto>, ApiError> {
    Ok(Json(state.pokemon.find_by_type(&pokemon_type).await?))
}

/// PUT /api/pokemon/{id}/update
async fn update_pokemon(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(dto): ValidJson<PokemonDto>,
) -> Result<Json<PokemonDto>, ApiError> {
    Ok(Json(state.pokemon.update(dto, id).await?))
}

/// DELETE /api/pokemon/{id}/delete - empty 200
async fn delete_pokemon(
    State(state): State<Arc<AppState>>,
    ValidPath(id): ValidPath<i32>,
) -> Result<StatusCode, ApiError> {
    state.pokemon.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}

/// Pokemon routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/pokemon", get(list_pokemon))
        .route("/api/pokemon/create", post(create_pokemon))
        .route("/api/pokemon/type/{pokemon_type}", get(get_pokemon_by_type))
        .route("/api/pokemon/{pokemon_id}", get(get_pokemon))
        .route("/api/pokemon/{pokemon_id}/update", put(update_pokemon))
        .route("/api/pokemon/{pokemon_id}/delete", delete(delete_pokemon))
}
