use super::model::Mpa;
use super::service::MpaService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// List all rating labels
#[utoipa::path(
    get,
    path = "/api/v1/mpa",
    responses(
        (status = 200, description = "List of ratings", body = ApiResponse<Vec<Mpa>>)
    ),
    tag = "Catalog"
)]
pub async fn list_mpa(State(state): State<AppState>) -> impl IntoResponse {
    match MpaService::find_all(&state.db).await {
        Ok(ratings) => ApiSuccess::ok(ratings, "Ratings retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get rating label by ID
#[utoipa::path(
    get,
    path = "/api/v1/mpa/{id}",
    params(
        ("id" = i64, Path, description = "Rating ID")
    ),
    responses(
        (status = 200, description = "Rating details", body = ApiResponse<Mpa>),
        (status = 404, description = "Rating not found")
    ),
    tag = "Catalog"
)]
pub async fn get_mpa(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match MpaService::resolve(&state.db, id).await {
        Ok(rating) => ApiSuccess::ok(rating, "Rating retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}
