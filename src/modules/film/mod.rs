use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_films)
                .post(handler::create_film)
                .put(handler::update_film),
        )
        .route("/{id}", get(handler::get_film))
}
