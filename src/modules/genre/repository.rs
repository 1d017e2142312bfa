use super::model::Genre;
use crate::common::error::AppResult;
use crate::infrastructure::db::pool::DbPool;
use sqlx::sqlite::SqliteExecutor;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

pub struct GenreRepository;

impl GenreRepository {
    pub async fn find_all(pool: &DbPool) -> AppResult<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT genre_id AS id, name
            FROM genres
            ORDER BY genre_id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(genres)
    }

    pub async fn find_by_id(pool: &DbPool, id: i64) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            SELECT genre_id AS id, name
            FROM genres
            WHERE genre_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(genre)
    }

    pub async fn find_for_film<'e, E>(executor: E, film_id: i64) -> AppResult<Vec<Genre>>
    where
        E: SqliteExecutor<'e>,
    {
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT g.genre_id AS id, g.name
            FROM genres g
            JOIN film_genres fg ON g.genre_id = fg.genre_id
            WHERE fg.film_id = $1
            ORDER BY g.genre_id ASC
            "#,
        )
        .bind(film_id)
        .fetch_all(executor)
        .await?;

        Ok(genres)
    }

    pub async fn count_existing(conn: &mut SqliteConnection, ids: &[i64]) -> AppResult<i64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM genres WHERE genre_id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");

        let count = query.build_query_scalar::<i64>().fetch_one(&mut *conn).await?;
        Ok(count)
    }

    pub async fn link_film_genres(
        conn: &mut SqliteConnection,
        film_id: i64,
        genre_ids: &[i64],
    ) -> AppResult<()> {
        if genre_ids.is_empty() {
            return Ok(());
        }

        let mut query = QueryBuilder::<Sqlite>::new("INSERT INTO film_genres (film_id, genre_id) ");
        query.push_values(genre_ids, |mut row, genre_id| {
            row.push_bind(film_id).push_bind(*genre_id);
        });
        query.push(" ON CONFLICT DO NOTHING");

        query.build().execute(&mut *conn).await?;
        Ok(())
    }

    pub async fn clear_film_genres(conn: &mut SqliteConnection, film_id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM film_genres WHERE film_id = $1")
            .bind(film_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
