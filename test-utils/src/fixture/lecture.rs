//! Lecture fixtures for creating in-memory test data.

use chrono::Utc;
use entity::lecture;

/// Default test lecture name.
pub const DEFAULT_NAME: &str = "Test Lecture";

/// Default course the test lecture belongs to.
pub const DEFAULT_COURSE_ID: i32 = 1;

/// Creates a lecture entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - course_id: `1`
/// - name: `"Test Lecture"`
/// - description: `None`
pub fn entity() -> lecture::Model {
    let now = Utc::now();

    lecture::Model {
        id: 1,
        course_id: DEFAULT_COURSE_ID,
        name: DEFAULT_NAME.to_string(),
        description: None,
        created_at: now,
        updated_at: now,
    }
}

/// Creates a lecture entity builder for customization.
pub fn entity_builder() -> LectureEntityBuilder {
    LectureEntityBuilder { entity: entity() }
}

/// Builder for lecture entity models with custom values.
pub struct LectureEntityBuilder {
    entity: lecture::Model,
}

impl LectureEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
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

    pub fn build(self) -> lecture::Model {
        self.entity
    }
}
