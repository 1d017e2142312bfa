use super::service::LikeService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::film::dto::LikeCountResponse;
use crate::modules::film::model::Film;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

#[utoipa::path(
    put,
    path = "/api/v1/films/{id}/like/{user_id}",
    params(
        ("id" = i64, Path, description = "Film ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Like recorded", body = ApiResponse<Film>),
        (status = 404, description = "Film or user not found")
    ),
    tag = "Likes"
)]
pub async fn like_film(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match LikeService::like(&state.db, id, user_id).await {
        Ok(film) => ApiSuccess::ok(film, "Like recorded").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/films/{id}/like/{user_id}",
    params(
        ("id" = i64, Path, description = "Film ID"),
        ("user_id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Like removed", body = ApiResponse<Film>),
        (status = 404, description = "Film or user not found")
    ),
    tag = "Likes"
)]
pub async fn unlike_film(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    match LikeService::unlike(&state.db, id, user_id).await {
        Ok(film) => ApiSuccess::ok(film, "Like removed").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/films/{id}/likes",
    params(
        ("id" = i64, Path, description = "Film ID")
    ),
    responses(
        (status = 200, description = "Number of users who like the film", body = ApiResponse<LikeCountResponse>),
        (status = 404, description = "Film not found")
    ),
    tag = "Likes"
)]
pub async fn count_likes(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match LikeService::count_likes(&state.db, id).await {
        Ok(likes) => ApiSuccess::ok(
            LikeCountResponse { film_id: id, likes },
            "Likes counted",
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
