//! Unit factory for creating test unit entities and lecture memberships.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::Value;

/// Factory for creating test units with customizable fields.
///
/// Defaults come from `fixture::unit::entity()`: a free-text unit with a unique name.
///
/// # Example
///
/// ```rust,ignore
/// let unit = UnitFactory::new(&db, lecture.course_id)
///     .content("file", json!({ "files": ["slides.pdf"] }))
///     .build()
///     .await?;
/// ```
pub struct UnitFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::unit::Model,
}

impl<'a> UnitFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        let id = next_id();
        let entity = fixture::unit::entity_builder()
            .course_id(course_id)
            .name(format!("Unit {}", id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the discriminator and its content document.
    pub fn content(mut self, kind: impl Into<String>, content: Value) -> Self {
        self.entity.kind = kind.into();
        self.entity.content = content.to_string();
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.entity.weight = weight;
        self
    }

    /// Builds and inserts the unit entity into the database.
    pub async fn build(self) -> Result<entity::unit::Model, DbErr> {
        entity::unit::ActiveModel {
            id: ActiveValue::NotSet,
            course_id: ActiveValue::Set(self.entity.course_id),
            kind: ActiveValue::Set(self.entity.kind),
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            progressable: ActiveValue::Set(self.entity.progressable),
            weight: ActiveValue::Set(self.entity.weight),
            content: ActiveValue::Set(self.entity.content),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a free-text unit with default values for the given course.
pub async fn create_unit(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::unit::Model, DbErr> {
    UnitFactory::new(db, course_id).build().await
}

/// Adds a unit to a lecture's collection at the given position.
pub async fn attach_unit(
    db: &DatabaseConnection,
    lecture_id: i32,
    unit_id: i32,
    position: i32,
) -> Result<entity::lecture_unit::Model, DbErr> {
    entity::lecture_unit::ActiveModel {
        id: ActiveValue::NotSet,
        lecture_id: ActiveValue::Set(lecture_id),
        unit_id: ActiveValue::Set(unit_id),
        position: ActiveValue::Set(position),
    }
    .insert(db)
    .await
}
