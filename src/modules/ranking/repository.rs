use super::model::{RankedRow, RankingFilter};
use crate::common::error::AppResult;
use crate::infrastructure::db::pool::DbPool;

pub struct RankingRepository;

impl RankingRepository {
    /// Likes are aggregated per film in a derived table before any other
    /// join, and genre membership is an `EXISTS` probe, so a film with
    /// several genres is still counted once per liking user.
    pub async fn top_by_likes(pool: &DbPool, count: u32, filter: &RankingFilter) -> AppResult<Vec<RankedRow>> {
        let window = filter.release_window()?;

        let rows = sqlx::query_as::<_, RankedRow>(
            r#"
            SELECT
                f.film_id AS id,
                f.name,
                f.description,
                f.release_date,
                f.duration,
                f.mpa_id,
                COALESCE(l.like_count, 0) AS like_count
            FROM films f
            LEFT JOIN (
                SELECT film_id, COUNT(DISTINCT user_id) AS like_count
                FROM likes
                GROUP BY film_id
            ) l ON l.film_id = f.film_id
            WHERE ($1 IS NULL OR EXISTS (
                    SELECT 1 FROM film_genres fg
                    WHERE fg.film_id = f.film_id AND fg.genre_id = $1
                ))
              AND ($2 IS NULL OR (f.release_date >= $2 AND f.release_date < $3))
            ORDER BY like_count DESC, f.film_id ASC
            LIMIT $4
            "#,
        )
        .bind(filter.genre_id())
        .bind(window.map(|(start, _)| start))
        .bind(window.map(|(_, end)| end))
        .bind(i64::from(count))
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
