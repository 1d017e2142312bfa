use crate::docs::ApiDoc;
use crate::modules::{film, genre, like, mpa, ranking};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use tower_http::cors::{Any, CorsLayer};

pub fn configure_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/v1", api_routes())
        .nest("/api/v1/films", film_routes())
        .nest("/api/v1/genres", genre::router())
        .nest("/api/v1/mpa", mpa::router())
        .layer(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "ok" }))
}

fn film_routes() -> Router<AppState> {
    film::router()
        .merge(ranking::router())
        .merge(like::router())
}
