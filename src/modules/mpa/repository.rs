use super::model::Mpa;
use crate::common::error::AppResult;
use crate::infrastructure::db::pool::DbPool;
use sqlx::sqlite::SqliteExecutor;

pub struct MpaRepository;

impl MpaRepository {
    pub async fn find_all(pool: &DbPool) -> AppResult<Vec<Mpa>> {
        let ratings = sqlx::query_as::<_, Mpa>(
            r#"
            SELECT mpa_id AS id, name
            FROM mpa
            ORDER BY mpa_id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(ratings)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> AppResult<Option<Mpa>>
    where
        E: SqliteExecutor<'e>,
    {
        let rating = sqlx::query_as::<_, Mpa>(
            r#"
            SELECT mpa_id AS id, name
            FROM mpa
            WHERE mpa_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(rating)
    }
}
