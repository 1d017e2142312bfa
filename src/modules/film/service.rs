use super::model::{Film, FilmDraft, FilmRow};
use super::repository::FilmRepository;
use crate::common::error::{AppError, AppResult};
use crate::infrastructure::db::pool::DbPool;
use crate::modules::genre::service::GenreService;
use crate::modules::like::repository::LikeRepository;
use crate::modules::mpa::service::MpaService;
use tracing::info;

pub struct FilmService;

impl FilmService {
    pub async fn get_by_id(db: &DbPool, id: i64) -> AppResult<Film> {
        let row = FilmRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::not_found("film not found"))?;

        Self::hydrate(db, row).await
    }

    pub async fn list_all(db: &DbPool) -> AppResult<Vec<Film>> {
        let rows = FilmRepository::find_all(db).await?;

        let mut films = Vec::with_capacity(rows.len());
        for row in rows {
            films.push(Self::hydrate(db, row).await?);
        }

        Ok(films)
    }

    pub async fn add(db: &DbPool, draft: FilmDraft) -> AppResult<Film> {
        let mut tx = db.begin().await?;

        MpaService::resolve(&mut *tx, draft.mpa_id).await?;
        let id = FilmRepository::insert(&mut tx, &draft).await?;
        GenreService::attach(&mut tx, id, &draft.genre_ids).await?;

        tx.commit().await?;
        info!(film_id = id, name = %draft.name, "Film added");

        Self::get_by_id(db, id).await
    }

    /// Full replace of the mutable fields and the genre set.
    pub async fn update(db: &DbPool, id: i64, draft: FilmDraft) -> AppResult<Film> {
        let mut tx = db.begin().await?;

        MpaService::resolve(&mut *tx, draft.mpa_id).await?;
        if FilmRepository::update(&mut tx, id, &draft).await? == 0 {
            return Err(AppError::not_found("film not found"));
        }
        GenreService::replace(&mut tx, id, &draft.genre_ids).await?;

        tx.commit().await?;
        info!(film_id = id, "Film updated");

        Self::get_by_id(db, id).await
    }

    pub async fn ensure_exists(db: &DbPool, id: i64) -> AppResult<()> {
        if FilmRepository::exists(db, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("film not found"))
        }
    }

    /// Attaches the classification label, genres and likers to a bare row.
    pub async fn hydrate(db: &DbPool, row: FilmRow) -> AppResult<Film> {
        let mpa = MpaService::resolve(db, row.mpa_id).await?;
        let genres = GenreService::for_film(db, row.id).await?;
        let likes = LikeRepository::user_ids_for_film(db, row.id).await?;

        Ok(Film {
            id: row.id,
            name: row.name,
            description: row.description,
            release_date: row.release_date,
            duration: row.duration,
            mpa,
            genres,
            likes: likes.into_iter().collect(),
        })
    }
}
