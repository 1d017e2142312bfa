use super::model::{RankedFilm, RankingFilter};
use super::repository::RankingRepository;
use crate::common::error::AppResult;
use crate::infrastructure::db::pool::DbPool;
use crate::modules::film::service::FilmService;
use tracing::debug;

pub struct RankingService;

impl RankingService {
    /// Most-liked films first; ties keep film id order.
    pub async fn top_by_likes(db: &DbPool, count: u32) -> AppResult<Vec<RankedFilm>> {
        Self::top_by_likes_filtered(db, count, &RankingFilter::none()).await
    }

    pub async fn top_by_likes_filtered(
        db: &DbPool,
        count: u32,
        filter: &RankingFilter,
    ) -> AppResult<Vec<RankedFilm>> {
        debug!(count, genre_id = ?filter.genre_id(), year = ?filter.year(), "Ranking films by likes");

        let rows = RankingRepository::top_by_likes(db, count, filter).await?;

        let mut ranked = Vec::with_capacity(rows.len());
        for row in rows {
            let film = FilmService::hydrate(db, row.film).await?;
            ranked.push(RankedFilm {
                film,
                like_count: row.like_count,
            });
        }

        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_support::{self, draft};
    use crate::infrastructure::db::pool::DbPool;
    use crate::modules::film::model::Film;
    use crate::modules::like::service::LikeService;
    use time::{Date, Month};

    const COMEDY: i64 = 1;
    const DRAMA: i64 = 2;
    const THRILLER: i64 = 4;

    async fn like_times(db: &DbPool, film: &Film, users: &[i64]) {
        for user in users {
            LikeService::like(db, film.id, *user).await.unwrap();
        }
    }

    async fn users(db: &DbPool, n: usize) -> Vec<i64> {
        let mut ids = Vec::with_capacity(n);
        for i in 0..n {
            ids.push(test_support::insert_user(db, &format!("user{i}")).await);
        }
        ids
    }

    fn names(ranked: &[RankedFilm]) -> Vec<&str> {
        ranked.iter().map(|r| r.film.name.as_str()).collect()
    }

    #[tokio::test]
    async fn orders_by_like_count_and_limits() {
        let db = test_support::pool().await;
        let u = users(&db, 3).await;
        let a = FilmService::add(&db, draft("A", 2000, &[])).await.unwrap();
        let b = FilmService::add(&db, draft("B", 2000, &[])).await.unwrap();
        FilmService::add(&db, draft("C", 2000, &[])).await.unwrap();
        like_times(&db, &a, &u[..1]).await;
        like_times(&db, &b, &u).await;

        let top = RankingService::top_by_likes(&db, 10).await.unwrap();
        assert_eq!(names(&top), ["B", "A", "C"]);
        let counts: Vec<i64> = top.iter().map(|r| r.like_count).collect();
        assert_eq!(counts, [3, 1, 0]);

        let top_two = RankingService::top_by_likes(&db, 2).await.unwrap();
        assert_eq!(names(&top_two), ["B", "A"]);
    }

    #[tokio::test]
    async fn zero_likes_are_eligible_and_ties_follow_id() {
        let db = test_support::pool().await;
        FilmService::add(&db, draft("First", 2000, &[])).await.unwrap();
        FilmService::add(&db, draft("Second", 2000, &[])).await.unwrap();

        let top = RankingService::top_by_likes(&db, 5).await.unwrap();
        assert_eq!(names(&top), ["First", "Second"]);
        assert!(top.iter().all(|r| r.like_count == 0));
    }

    #[tokio::test]
    async fn unfiltered_matches_plain_ranking() {
        let db = test_support::pool().await;
        let u = users(&db, 2).await;
        let a = FilmService::add(&db, draft("A", 1990, &[COMEDY])).await.unwrap();
        FilmService::add(&db, draft("B", 1991, &[DRAMA])).await.unwrap();
        like_times(&db, &a, &u).await;

        let plain = RankingService::top_by_likes(&db, 5).await.unwrap();
        let filtered = RankingService::top_by_likes_filtered(&db, 5, &RankingFilter::new(None, None).unwrap())
            .await
            .unwrap();
        assert_eq!(plain, filtered);
    }

    #[tokio::test]
    async fn year_filter_keeps_only_that_year() {
        let db = test_support::pool().await;
        let u = users(&db, 3).await;
        let a = FilmService::add(&db, draft("A", 2010, &[COMEDY])).await.unwrap();
        let b = FilmService::add(&db, draft("B", 2015, &[DRAMA])).await.unwrap();
        like_times(&db, &a, &u).await;
        like_times(&db, &b, &u[..1]).await;

        let filter = RankingFilter::new(None, Some(2010)).unwrap();
        let top = RankingService::top_by_likes_filtered(&db, 5, &filter).await.unwrap();

        assert_eq!(names(&top), ["A"]);
        assert_eq!(top[0].like_count, 3);
        assert_eq!(top[0].film.like_count(), 3);
    }

    #[tokio::test]
    async fn year_filter_excludes_adjacent_year_boundaries() {
        let db = test_support::pool().await;
        let mut new_years_eve = draft("Eve", 2010, &[]);
        new_years_eve.release_date = Date::from_calendar_date(2010, Month::December, 31).unwrap();
        FilmService::add(&db, new_years_eve).await.unwrap();
        FilmService::add(&db, draft("Day", 2011, &[])).await.unwrap();

        let in_2010 = RankingFilter::new(None, Some(2010)).unwrap();
        let top = RankingService::top_by_likes_filtered(&db, 5, &in_2010).await.unwrap();
        assert_eq!(names(&top), ["Eve"]);

        let in_2011 = RankingFilter::new(None, Some(2011)).unwrap();
        let top = RankingService::top_by_likes_filtered(&db, 5, &in_2011).await.unwrap();
        assert_eq!(names(&top), ["Day"]);
    }

    #[tokio::test]
    async fn genre_filter_and_combined_filter() {
        let db = test_support::pool().await;
        let u = users(&db, 2).await;
        let a = FilmService::add(&db, draft("A", 2010, &[COMEDY, DRAMA])).await.unwrap();
        let b = FilmService::add(&db, draft("B", 2011, &[DRAMA])).await.unwrap();
        FilmService::add(&db, draft("C", 2010, &[THRILLER])).await.unwrap();
        like_times(&db, &a, &u[..1]).await;
        like_times(&db, &b, &u).await;

        let drama = RankingFilter::new(Some(DRAMA), None).unwrap();
        let top = RankingService::top_by_likes_filtered(&db, 5, &drama).await.unwrap();
        assert_eq!(names(&top), ["B", "A"]);

        let drama_2010 = RankingFilter::new(Some(DRAMA), Some(2010)).unwrap();
        let top = RankingService::top_by_likes_filtered(&db, 5, &drama_2010).await.unwrap();
        assert_eq!(names(&top), ["A"]);

        let action = RankingFilter::new(Some(6), None).unwrap();
        assert!(RankingService::top_by_likes_filtered(&db, 5, &action).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn multi_genre_film_is_not_double_counted() {
        let db = test_support::pool().await;
        let u = users(&db, 3).await;
        let film = FilmService::add(&db, draft("Fanout", 2020, &[COMEDY, DRAMA])).await.unwrap();
        like_times(&db, &film, &u).await;

        for filter in [
            RankingFilter::none(),
            RankingFilter::new(Some(COMEDY), None).unwrap(),
            RankingFilter::new(Some(DRAMA), Some(2020)).unwrap(),
            RankingFilter::new(None, Some(2020)).unwrap(),
        ] {
            let top = RankingService::top_by_likes_filtered(&db, 5, &filter).await.unwrap();
            assert_eq!(top.len(), 1, "filter {filter:?}");
            assert_eq!(top[0].like_count, 3, "filter {filter:?}");
        }
    }

    #[tokio::test]
    async fn zero_count_returns_nothing() {
        let db = test_support::pool().await;
        FilmService::add(&db, draft("A", 2000, &[])).await.unwrap();

        assert!(RankingService::top_by_likes(&db, 0).await.unwrap().is_empty());
    }
}
