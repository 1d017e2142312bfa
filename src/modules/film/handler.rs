use super::dto::{CreateFilmRequest, UpdateFilmRequest};
use super::model::Film;
use super::service::FilmService;
use crate::common::error::AppError;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

/// List all films
#[utoipa::path(
    get,
    path = "/api/v1/films",
    responses(
        (status = 200, description = "List of films", body = ApiResponse<Vec<Film>>),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Films"
)]
pub async fn list_films(State(state): State<AppState>) -> impl IntoResponse {
    match FilmService::list_all(&state.db).await {
        Ok(films) => ApiSuccess::ok(films, "Films retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get film by ID
#[utoipa::path(
    get,
    path = "/api/v1/films/{id}",
    params(
        ("id" = i64, Path, description = "Film ID")
    ),
    responses(
        (status = 200, description = "Film details", body = ApiResponse<Film>),
        (status = 404, description = "Film not found")
    ),
    tag = "Films"
)]
pub async fn get_film(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match FilmService::get_by_id(&state.db, id).await {
        Ok(film) => ApiSuccess::ok(film, "Film retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Add a film
#[utoipa::path(
    post,
    path = "/api/v1/films",
    request_body = CreateFilmRequest,
    responses(
        (status = 201, description = "Film created", body = ApiResponse<Film>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Rating or genre not found")
    ),
    tag = "Films"
)]
pub async fn create_film(
    State(state): State<AppState>,
    Json(req): Json<CreateFilmRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return AppError::from(e).into_response();
    }

    match FilmService::add(&state.db, req.into()).await {
        Ok(film) => ApiSuccess::created(film, "Film created successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace a film's fields and genre set
#[utoipa::path(
    put,
    path = "/api/v1/films",
    request_body = UpdateFilmRequest,
    responses(
        (status = 200, description = "Film updated", body = ApiResponse<Film>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Film not found")
    ),
    tag = "Films"
)]
pub async fn update_film(
    State(state): State<AppState>,
    Json(req): Json<UpdateFilmRequest>,
) -> impl IntoResponse {
    if let Err(e) = req.validate() {
        return AppError::from(e).into_response();
    }

    match FilmService::update(&state.db, req.id, req.film.into()).await {
        Ok(film) => ApiSuccess::ok(film, "Film updated successfully").into_response(),
        Err(e) => e.into_response(),
    }
}
