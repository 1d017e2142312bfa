use crate::common::error::AppResult;
use crate::infrastructure::db::pool::DbPool;
use sqlx::sqlite::SqliteExecutor;

pub struct LikeRepository;

impl LikeRepository {
    /// A repeated like hits the `(film_id, user_id)` key and is skipped.
    pub async fn insert(pool: &DbPool, film_id: i64, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO likes (film_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(film_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &DbPool, film_id: i64, user_id: i64) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM likes WHERE film_id = $1 AND user_id = $2")
            .bind(film_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count_for_film<'e, E>(executor: E, film_id: i64) -> AppResult<i64>
    where
        E: SqliteExecutor<'e>,
    {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT user_id) FROM likes WHERE film_id = $1",
        )
        .bind(film_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    pub async fn user_ids_for_film<'e, E>(executor: E, film_id: i64) -> AppResult<Vec<i64>>
    where
        E: SqliteExecutor<'e>,
    {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT user_id FROM likes WHERE film_id = $1 ORDER BY user_id ASC",
        )
        .bind(film_id)
        .fetch_all(executor)
        .await?;

        Ok(ids)
    }
}
