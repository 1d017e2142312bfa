use super::model::Genre;
use super::service::GenreService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// List all genres
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "List of genres", body = ApiResponse<Vec<Genre>>)
    ),
    tag = "Catalog"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match GenreService::find_all(&state.db).await {
        Ok(genres) => ApiSuccess::ok(genres, "Genres retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = i64, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = ApiResponse<Genre>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Catalog"
)]
pub async fn get_genre(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match GenreService::find_by_id(&state.db, id).await {
        Ok(genre) => ApiSuccess::ok(genre, "Genre retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}
