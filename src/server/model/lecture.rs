//! Lecture domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::lecture::{CreateLectureDto, LectureDto},
    server::{error::AppError, model::unit::Unit},
};

/// Lecture with its units in collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct Lecture {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub units: Vec<Unit>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lecture {
    pub fn from_entity(entity: entity::lecture::Model, units: Vec<Unit>) -> Self {
        Self {
            id: entity.id,
            course_id: entity.course_id,
            name: entity.name,
            description: entity.description,
            units,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> LectureDto {
        LectureDto {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
            description: self.description,
            units: self.units.into_iter().map(Unit::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateLectureParams {
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl CreateLectureParams {
    /// Converts the request DTO, rejecting blank names.
    pub fn from_dto(dto: CreateLectureDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Lecture name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            course_id: dto.course_id,
            name,
            description: dto.description.filter(|d| !d.trim().is_empty()),
        })
    }
}
