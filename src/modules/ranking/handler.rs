use super::dto::PopularQuery;
use super::model::{RankedFilm, RankingFilter};
use super::service::RankingService;
use crate::common::error::{AppError, AppResult};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::infrastructure::db::pool::DbPool;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::IntoResponse,
};
use validator::Validate;

/// Most-liked films, optionally narrowed by genre and release year
#[utoipa::path(
    get,
    path = "/api/v1/films/popular",
    params(PopularQuery),
    responses(
        (status = 200, description = "Films ordered by like count", body = ApiResponse<Vec<RankedFilm>>),
        (status = 400, description = "Bad Request")
    ),
    tag = "Films"
)]
pub async fn popular_films(
    State(state): State<AppState>,
    query: Result<Query<PopularQuery>, QueryRejection>,
) -> impl IntoResponse {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return AppError::from(rejection).into_response(),
    };

    match popular(&state.db, query).await {
        Ok(films) => ApiSuccess::ok(films, "Popular films retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

async fn popular(db: &DbPool, query: PopularQuery) -> AppResult<Vec<RankedFilm>> {
    query.validate().map_err(AppError::from)?;
    let filter = RankingFilter::new(query.genre_id, query.year)?;
    RankingService::top_by_likes_filtered(db, query.count(), &filter).await
}
