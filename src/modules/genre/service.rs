use super::model::Genre;
use super::repository::GenreRepository;
use crate::common::error::{AppError, AppResult};
use crate::infrastructure::db::pool::DbPool;
use sqlx::SqliteConnection;
use sqlx::sqlite::SqliteExecutor;
use std::collections::BTreeSet;

pub struct GenreService;

impl GenreService {
    pub async fn find_all(db: &DbPool) -> AppResult<Vec<Genre>> {
        GenreRepository::find_all(db).await
    }

    pub async fn find_by_id(db: &DbPool, id: i64) -> AppResult<Genre> {
        GenreRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("genre not found"))
    }

    /// Genres of a film, ordered by genre id.
    pub async fn for_film<'e, E>(executor: E, film_id: i64) -> AppResult<Vec<Genre>>
    where
        E: SqliteExecutor<'e>,
    {
        GenreRepository::find_for_film(executor, film_id).await
    }

    /// Adds genre associations to a film. Repeated ids collapse into one row.
    pub async fn attach(conn: &mut SqliteConnection, film_id: i64, genre_ids: &[i64]) -> AppResult<()> {
        let unique: Vec<i64> = genre_ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        if unique.is_empty() {
            return Ok(());
        }

        let known = GenreRepository::count_existing(conn, &unique).await?;
        if known != unique.len() as i64 {
            return Err(AppError::not_found("genre not found"));
        }

        GenreRepository::link_film_genres(conn, film_id, &unique).await
    }

    /// Clear-then-add. Callers run this inside a transaction so the film
    /// is never observed with a half-written genre set.
    pub async fn replace(conn: &mut SqliteConnection, film_id: i64, genre_ids: &[i64]) -> AppResult<()> {
        GenreRepository::clear_film_genres(conn, film_id).await?;
        Self::attach(conn, film_id, genre_ids).await
    }
}
