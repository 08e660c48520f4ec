//! Unit fixtures: in-memory entity models and the JSON payloads clients submit as `model`.
//!
//! The JSON helpers produce documents that pass unit validation for each content kind, so tests
//! can tweak a single field to provoke a specific validation error.

use chrono::Utc;
use entity::unit;
use serde_json::{json, Value};

/// Default test unit name.
pub const DEFAULT_NAME: &str = "Test Unit";

/// Default course the test unit belongs to.
pub const DEFAULT_COURSE_ID: i32 = 1;

/// Default discriminator of fixture units.
pub const DEFAULT_KIND: &str = "free-text";

/// Default free-text markdown body.
pub const DEFAULT_MARKDOWN: &str = "# Introduction";

/// Creates a free-text unit entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - course_id: `1`
/// - kind: `"free-text"`
/// - name: `"Test Unit"`
/// - progressable: `false`
/// - weight: `0`
/// - content: `{"markdown": "# Introduction"}`
pub fn entity() -> unit::Model {
    let now = Utc::now();

    unit::Model {
        id: 1,
        course_id: DEFAULT_COURSE_ID,
        kind: DEFAULT_KIND.to_string(),
        name: DEFAULT_NAME.to_string(),
        description: None,
        progressable: false,
        weight: 0,
        content: json!({ "markdown": DEFAULT_MARKDOWN }).to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Creates a unit entity builder for customization.
pub fn entity_builder() -> UnitEntityBuilder {
    UnitEntityBuilder { entity: entity() }
}

/// Builder for unit entity models with custom values.
pub struct UnitEntityBuilder {
    entity: unit::Model,
}

impl UnitEntityBuilder {
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

    /// Sets the discriminator together with its serialized content.
    pub fn content(mut self, kind: impl Into<String>, content: Value) -> Self {
        self.entity.kind = kind.into();
        self.entity.content = content.to_string();
        self
    }

    pub fn progressable(mut self, progressable: bool) -> Self {
        self.entity.progressable = progressable;
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.entity.weight = weight;
        self
    }

    pub fn build(self) -> unit::Model {
        self.entity
    }
}

/// A valid free-text unit document.
pub fn free_text_model(course_id: i32) -> Value {
    json!({
        "_course": course_id,
        "__t": "free-text",
        "name": DEFAULT_NAME,
        "description": "Read this first",
        "progressable": false,
        "weight": 0,
        "content": { "markdown": DEFAULT_MARKDOWN },
    })
}

/// A valid code-kata unit document.
pub fn code_kata_model(course_id: i32) -> Value {
    json!({
        "_course": course_id,
        "__t": "code-kata",
        "name": "FizzBuzz",
        "progressable": true,
        "weight": 2,
        "content": {
            "definition": "Print the numbers from 1 to 100.",
            "code": "function fizzbuzz() {}",
            "test": "assert(fizzbuzz);",
        },
    })
}

/// A valid task unit document with one question and two answers.
pub fn task_model(course_id: i32) -> Value {
    json!({
        "_course": course_id,
        "__t": "task",
        "name": "Quiz",
        "progressable": true,
        "weight": 1,
        "content": {
            "tasks": [
                {
                    "name": "Is Rust memory safe?",
                    "answers": [
                        { "value": "Yes", "isCorrect": true },
                        { "value": "No", "isCorrect": false },
                    ],
                },
            ],
        },
    })
}

/// A valid file unit document.
pub fn file_model(course_id: i32, files: &[&str]) -> Value {
    json!({
        "_course": course_id,
        "__t": "file",
        "name": "Slides",
        "content": { "files": files },
    })
}

/// A valid video unit document.
pub fn video_model(course_id: i32) -> Value {
    json!({
        "_course": course_id,
        "__t": "video",
        "name": "Recording",
        "content": { "files": ["lecture-01.mp4"] },
    })
}
