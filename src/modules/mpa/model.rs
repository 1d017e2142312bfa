use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Content rating label (G, PG, ...). Every film carries exactly one.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone, PartialEq, Eq)]
pub struct Mpa {
    pub id: i64,
    pub name: String,
}
