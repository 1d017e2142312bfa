use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;
use utoipa::IntoParams;
use validator::Validate;

pub const DEFAULT_COUNT: u32 = 10;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PopularQuery {
    /// Maximum number of films to return, 10 when absent.
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 1, message = "count must be positive"))]
    pub count: Option<u32>,
    /// Only films carrying this genre.
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 1, message = "genreId must be positive"))]
    pub genre_id: Option<i64>,
    /// Only films released in this year.
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 1, message = "year must be positive"))]
    pub year: Option<i32>,
}

impl PopularQuery {
    pub fn count(&self) -> u32 {
        self.count.unwrap_or(DEFAULT_COUNT)
    }
}

/// `?genreId=` carries no filter, same as leaving the parameter out.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}
