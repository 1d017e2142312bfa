use super::model::{FilmDraft, FilmRow};
use crate::common::error::AppResult;
use crate::infrastructure::db::pool::DbPool;
use sqlx::SqliteConnection;
use sqlx::sqlite::SqliteExecutor;

pub struct FilmRepository;

impl FilmRepository {
    pub async fn insert(conn: &mut SqliteConnection, draft: &FilmDraft) -> AppResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO films (name, description, release_date, duration, mpa_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING film_id
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.release_date)
        .bind(draft.duration)
        .bind(draft.mpa_id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(id)
    }

    /// Returns the number of rows touched; zero means the id is unknown.
    pub async fn update(conn: &mut SqliteConnection, id: i64, draft: &FilmDraft) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE films
            SET
                name = $1,
                description = $2,
                release_date = $3,
                duration = $4,
                mpa_id = $5
            WHERE film_id = $6
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.release_date)
        .bind(draft.duration)
        .bind(draft.mpa_id)
        .bind(id)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> AppResult<Option<FilmRow>>
    where
        E: SqliteExecutor<'e>,
    {
        let film = sqlx::query_as::<_, FilmRow>(
            r#"
            SELECT film_id AS id, name, description, release_date, duration, mpa_id
            FROM films
            WHERE film_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(film)
    }

    pub async fn find_all(pool: &DbPool) -> AppResult<Vec<FilmRow>> {
        let films = sqlx::query_as::<_, FilmRow>(
            r#"
            SELECT film_id AS id, name, description, release_date, duration, mpa_id
            FROM films
            ORDER BY film_id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(films)
    }

    pub async fn exists<'e, E>(executor: E, id: i64) -> AppResult<bool>
    where
        E: SqliteExecutor<'e>,
    {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM films WHERE film_id = $1")
            .bind(id)
            .fetch_one(executor)
            .await?;

        Ok(count > 0)
    }
}
