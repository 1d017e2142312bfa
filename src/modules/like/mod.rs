use axum::Router;
use axum::routing::{get, put};
use crate::state::AppState;

pub mod handler;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/like/{user_id}", put(handler::like_film).delete(handler::unlike_film))
        .route("/{id}/likes", get(handler::count_likes))
}
