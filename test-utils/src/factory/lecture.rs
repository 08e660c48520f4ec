//! Lecture factory for creating test lecture entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lectures with customizable fields.
///
/// Defaults come from `fixture::lecture::entity()` with a unique name per lecture.
///
/// # Example
///
/// ```rust,ignore
/// let lecture = LectureFactory::new(&db)
///     .course_id(7)
///     .name("Ownership")
///     .build()
///     .await?;
/// ```
pub struct LectureFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::lecture::Model,
}

impl<'a> LectureFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::lecture::entity_builder()
            .name(format!("Lecture {}", id))
            .build();

        Self { db, entity }
    }

    pub fn course_id(mut self, course_id: i32) -> Self {
        self.entity.course_id = course_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    /// Builds and inserts the lecture entity into the database.
    pub async fn build(self) -> Result<entity::lecture::Model, DbErr> {
        entity::lecture::ActiveModel {
            id: ActiveValue::NotSet,
            course_id: ActiveValue::Set(self.entity.course_id),
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lecture with default values.
///
/// Shorthand for `LectureFactory::new(db).build().await`.
pub async fn create_lecture(db: &DatabaseConnection) -> Result<entity::lecture::Model, DbErr> {
    LectureFactory::new(db).build().await
}
