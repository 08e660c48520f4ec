use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::unit::UnitDto;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// A lecture with its units populated in collection order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LectureDto {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(rename = "_course")]
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub units: Vec<UnitDto>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateLectureDto {
    #[serde(rename = "_course")]
    pub course_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
