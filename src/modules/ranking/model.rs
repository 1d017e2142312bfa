use serde::Serialize;
use sqlx::FromRow;
use time::{Date, Month};
use utoipa::ToSchema;

use crate::common::error::{AppError, AppResult};
use crate::modules::film::model::{Film, FilmRow};

/// Optional narrowing of a popularity query. `None` means "no filter".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankingFilter {
    genre_id: Option<i64>,
    year: Option<i32>,
}

impl RankingFilter {
    pub fn new(genre_id: Option<i64>, year: Option<i32>) -> AppResult<Self> {
        if let Some(genre_id) = genre_id {
            if genre_id <= 0 {
                return Err(AppError::validation("genre id must be positive"));
            }
        }
        if let Some(year) = year {
            if !(1..=9998).contains(&year) {
                return Err(AppError::validation("year must be between 1 and 9998"));
            }
        }

        Ok(Self { genre_id, year })
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn genre_id(&self) -> Option<i64> {
        self.genre_id
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Half-open `[Jan 1 year, Jan 1 year+1)` range for the year filter.
    pub fn release_window(&self) -> AppResult<Option<(Date, Date)>> {
        let Some(year) = self.year else {
            return Ok(None);
        };

        let start = Date::from_calendar_date(year, Month::January, 1)
            .map_err(|e| AppError::validation(e.to_string()))?;
        let end = Date::from_calendar_date(year + 1, Month::January, 1)
            .map_err(|e| AppError::validation(e.to_string()))?;

        Ok(Some((start, end)))
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct RankedRow {
    #[sqlx(flatten)]
    pub film: FilmRow,
    pub like_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedFilm {
    #[serde(flatten)]
    pub film: Film,
    pub like_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_filters() {
        assert!(matches!(RankingFilter::new(Some(-1), None), Err(AppError::Validation(_))));
        assert!(matches!(RankingFilter::new(Some(0), None), Err(AppError::Validation(_))));
        assert!(matches!(RankingFilter::new(None, Some(-1)), Err(AppError::Validation(_))));
    }

    #[test]
    fn release_window_spans_one_year() {
        let filter = RankingFilter::new(None, Some(2010)).unwrap();
        let (start, end) = filter.release_window().unwrap().unwrap();
        assert_eq!(start.to_string(), "2010-01-01");
        assert_eq!(end.to_string(), "2011-01-01");

        assert_eq!(RankingFilter::none().release_window().unwrap(), None);
    }
}
