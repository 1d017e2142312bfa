use serde::{Deserialize, Serialize};
use time::{Date, Month};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::model::{iso_date, FilmDraft};

/// `{ "id": 1 }` reference to a rating label or genre.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IdRef {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmRequest {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 200, message = "description must be at most 200 characters"))]
    pub description: String,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    #[validate(custom(function = "not_before_first_screening"))]
    pub release_date: Date,
    #[validate(range(min = 1, message = "duration must be positive"))]
    pub duration: i32,
    pub mpa: IdRef,
    #[serde(default)]
    pub genres: Vec<IdRef>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateFilmRequest {
    pub id: i64,
    #[serde(flatten)]
    #[validate(nested)]
    pub film: CreateFilmRequest,
}

impl From<CreateFilmRequest> for FilmDraft {
    fn from(req: CreateFilmRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            release_date: req.release_date,
            duration: req.duration,
            mpa_id: req.mpa.id,
            genre_ids: req.genres.into_iter().map(|g| g.id).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeCountResponse {
    pub film_id: i64,
    pub likes: i64,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("name must not be blank".into()));
    }
    Ok(())
}

fn not_before_first_screening(date: &Date) -> Result<(), ValidationError> {
    let first_screening = Date::from_calendar_date(1895, Month::December, 28)
        .map_err(|_| ValidationError::new("release_date"))?;
    if *date < first_screening {
        return Err(ValidationError::new("release_date")
            .with_message("release date must not be before 1895-12-28".into()));
    }
    Ok(())
}
