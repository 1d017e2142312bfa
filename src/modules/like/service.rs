use super::repository::LikeRepository;
use crate::common::error::AppResult;
use crate::infrastructure::db::pool::DbPool;
use crate::modules::film::model::Film;
use crate::modules::film::service::FilmService;
use crate::modules::user::service::UserService;
use tracing::{debug, info};

/// Records which users like which films. The set of likers per film is a
/// true set: liking twice is a no-op, unliking an absent pair is a no-op.
pub struct LikeService;

impl LikeService {
    pub async fn like(db: &DbPool, film_id: i64, user_id: i64) -> AppResult<Film> {
        FilmService::ensure_exists(db, film_id).await?;
        UserService::ensure_exists(db, user_id).await?;

        let inserted = LikeRepository::insert(db, film_id, user_id).await?;
        if inserted == 0 {
            debug!(film_id, user_id, "Like already recorded");
        } else {
            info!(film_id, user_id, "Like added");
        }

        FilmService::get_by_id(db, film_id).await
    }

    pub async fn unlike(db: &DbPool, film_id: i64, user_id: i64) -> AppResult<Film> {
        UserService::ensure_exists(db, user_id).await?;
        FilmService::ensure_exists(db, film_id).await?;

        let removed = LikeRepository::delete(db, film_id, user_id).await?;
        if removed == 0 {
            debug!(film_id, user_id, "No like to remove");
        } else {
            info!(film_id, user_id, "Like removed");
        }

        FilmService::get_by_id(db, film_id).await
    }

    pub async fn count_likes(db: &DbPool, film_id: i64) -> AppResult<i64> {
        FilmService::ensure_exists(db, film_id).await?;
        LikeRepository::count_for_film(db, film_id).await
    }
}
