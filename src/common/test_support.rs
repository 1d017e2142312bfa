//! Fixtures for unit tests: an in-memory database plus rows the service
//! layer does not create itself.

use crate::infrastructure::db::pool::{connect_to_db, DbPool};
use crate::modules::film::model::FilmDraft;
use time::{Date, Month};

pub async fn pool() -> DbPool {
    connect_to_db("sqlite::memory:", 1)
        .await
        .expect("in-memory database")
}

pub async fn insert_user(db: &DbPool, login: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, login, name) VALUES ($1, $2, $2) RETURNING user_id",
    )
    .bind(format!("{login}@example.com"))
    .bind(login)
    .fetch_one(db)
    .await
    .expect("insert user")
}

/// Inserts a film row directly, bypassing the film service.
pub async fn insert_bare_film(db: &DbPool, name: &str, year: i32) -> i64 {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO films (name, description, release_date, duration, mpa_id)
        VALUES ($1, '', $2, 100, 1)
        RETURNING film_id
        "#,
    )
    .bind(name)
    .bind(jan_first(year))
    .fetch_one(db)
    .await
    .expect("insert film")
}

pub fn jan_first(year: i32) -> Date {
    Date::from_calendar_date(year, Month::January, 1).expect("valid date")
}

pub fn draft(name: &str, year: i32, genre_ids: &[i64]) -> FilmDraft {
    FilmDraft {
        name: name.to_string(),
        description: format!("{name} description"),
        release_date: jan_first(year),
        duration: 120,
        mpa_id: 1,
        genre_ids: genre_ids.to_vec(),
    }
}
