use serde::Serialize;
use sqlx::FromRow;
use std::collections::BTreeSet;
use time::Date;
use utoipa::ToSchema;

use crate::modules::genre::model::Genre;
use crate::modules::mpa::model::Mpa;

/// `YYYY-MM-DD` (de)serialization for release dates.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;
    use time::macros::format_description;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, format_description!("[year]-[month]-[day]")).map_err(serde::de::Error::custom)
    }
}

/// A row of the `films` table, before classification, genres and likes
/// are attached.
#[derive(Debug, Clone, FromRow)]
pub struct FilmRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub release_date: Date,
    pub duration: i32,
    pub mpa_id: i64,
}

/// Fully hydrated film as returned to callers.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    pub release_date: Date,
    /// Minutes.
    pub duration: i32,
    pub mpa: Mpa,
    pub genres: Vec<Genre>,
    /// Ids of users who like the film.
    #[schema(value_type = Vec<i64>)]
    pub likes: BTreeSet<i64>,
}

impl Film {
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// Mutable fields of a film: the payload of both add and update.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmDraft {
    pub name: String,
    pub description: String,
    pub release_date: Date,
    pub duration: i32,
    pub mpa_id: i64,
    pub genre_ids: Vec<i64>,
}
