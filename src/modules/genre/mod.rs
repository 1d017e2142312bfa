use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_genres))
        .route("/{id}", get(handler::get_genre))
}
