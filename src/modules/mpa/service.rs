use super::model::Mpa;
use super::repository::MpaRepository;
use crate::common::error::{AppError, AppResult};
use crate::infrastructure::db::pool::DbPool;
use sqlx::sqlite::SqliteExecutor;

pub struct MpaService;

impl MpaService {
    pub async fn find_all(db: &DbPool) -> AppResult<Vec<Mpa>> {
        MpaRepository::find_all(db).await
    }

    /// Resolves a rating id to its label, failing with `NotFound` when unknown.
    pub async fn resolve<'e, E>(executor: E, id: i64) -> AppResult<Mpa>
    where
        E: SqliteExecutor<'e>,
    {
        MpaRepository::find_by_id(executor, id)
            .await?
            .ok_or_else(|| AppError::not_found("mpa not found"))
    }
}
