use crate::common::error::AppResult;
use sqlx::sqlite::SqliteExecutor;

pub struct UserRepository;

impl UserRepository {
    pub async fn exists<'e, E>(executor: E, user_id: i64) -> AppResult<bool>
    where
        E: SqliteExecutor<'e>,
    {
        let found = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(executor)
            .await?;

        Ok(found > 0)
    }
}
