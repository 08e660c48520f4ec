//! Unit domain models, content variants and schema validation.
//!
//! A unit document as submitted by clients looks like
//!
//! ```json
//! { "_course": 1, "__t": "free-text", "name": "Intro", "content": { "markdown": "# Hi" } }
//! ```
//!
//! `UnitParams::validate` checks such a document and produces the typed parameters used for
//! inserts and updates. Validation collects every field error before failing so clients can
//! highlight all offending fields at once.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::{
    model::unit::{UnitDto, UnitKind},
    server::error::{internal::InternalError, validation::ValidationError},
};

/// Top-level keys clients may submit but never change.
const IMMUTABLE_KEYS: [&str; 4] = ["_id", "createdAt", "updatedAt", "__v"];

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub value: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskItem {
    pub name: String,
    pub answers: Vec<Answer>,
}

/// Variant-specific payload of a unit.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitContent {
    FreeText {
        markdown: String,
    },
    CodeKata {
        definition: String,
        code: String,
        test: String,
    },
    Task {
        tasks: Vec<TaskItem>,
    },
    File {
        files: Vec<String>,
    },
    /// Always holds at least one file.
    Video {
        files: Vec<String>,
    },
}

impl UnitContent {
    pub fn kind(&self) -> UnitKind {
        match self {
            Self::FreeText { .. } => UnitKind::FreeText,
            Self::CodeKata { .. } => UnitKind::CodeKata,
            Self::Task { .. } => UnitKind::Task,
            Self::File { .. } => UnitKind::File,
            Self::Video { .. } => UnitKind::Video,
        }
    }

    /// Parses a content document for `kind`, reporting errors under `content.*` paths.
    pub fn parse(kind: UnitKind, content: &Value) -> Result<Self, BTreeMap<String, String>> {
        let mut errors = BTreeMap::new();
        let empty = Map::new();
        let obj = match content {
            Value::Object(obj) => obj,
            Value::Null => &empty,
            other => {
                errors.insert("content".to_string(), cast_message("Object", other, "content"));
                return Err(errors);
            }
        };

        let mut fields = Fields::new(obj, "content.", &mut errors);

        let parsed = match kind {
            UnitKind::FreeText => Self::FreeText {
                markdown: fields.string_or_default("markdown"),
            },
            UnitKind::CodeKata => Self::CodeKata {
                definition: fields.required_string("definition").unwrap_or_default(),
                code: fields.string_or_default("code"),
                test: fields.required_string("test").unwrap_or_default(),
            },
            UnitKind::Task => Self::Task {
                tasks: fields.tasks("tasks"),
            },
            UnitKind::File => Self::File {
                files: fields.strings("files"),
            },
            UnitKind::Video => {
                let files = fields.strings("files");
                if files.is_empty() && !fields.has_error("files") {
                    fields.error("files", "Path `content.files` must contain at least one file.");
                }
                Self::Video { files }
            }
        };

        if errors.is_empty() {
            Ok(parsed)
        } else {
            Err(errors)
        }
    }

    /// Reads content back from its stored JSON column.
    pub fn from_stored(unit_id: i32, kind: UnitKind, raw: &str) -> Result<Self, InternalError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|source| InternalError::CorruptUnitContent { unit_id, source })?;

        Self::parse(kind, &value).map_err(|errors| InternalError::InvalidUnitContent {
            unit_id,
            errors: errors
                .into_iter()
                .map(|(path, msg)| format!("{}: {}", path, msg))
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();

        match self {
            Self::FreeText { markdown } => {
                obj.insert("markdown".to_string(), Value::from(markdown.as_str()));
            }
            Self::CodeKata {
                definition,
                code,
                test,
            } => {
                obj.insert("definition".to_string(), Value::from(definition.as_str()));
                obj.insert("code".to_string(), Value::from(code.as_str()));
                obj.insert("test".to_string(), Value::from(test.as_str()));
            }
            Self::Task { tasks } => {
                let tasks = tasks
                    .iter()
                    .map(|task| {
                        let answers = task
                            .answers
                            .iter()
                            .map(|answer| {
                                let mut a = Map::new();
                                a.insert("value".to_string(), Value::from(answer.value.as_str()));
                                a.insert("isCorrect".to_string(), Value::Bool(answer.is_correct));
                                Value::Object(a)
                            })
                            .collect::<Vec<_>>();

                        let mut t = Map::new();
                        t.insert("name".to_string(), Value::from(task.name.as_str()));
                        t.insert("answers".to_string(), Value::Array(answers));
                        Value::Object(t)
                    })
                    .collect::<Vec<_>>();

                obj.insert("tasks".to_string(), Value::Array(tasks));
            }
            Self::File { files } | Self::Video { files } => {
                obj.insert("files".to_string(), Value::from(files.clone()));
            }
        }

        Value::Object(obj)
    }
}

/// Unit domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i32,
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub progressable: bool,
    pub weight: i32,
    pub content: UnitContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Unit {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Unit)` - Stored row is well formed
    /// - `Err(InternalError)` - Unknown discriminator or unreadable content column
    pub fn from_entity(entity: entity::unit::Model) -> Result<Self, InternalError> {
        let kind = entity
            .kind
            .parse::<UnitKind>()
            .map_err(|_| InternalError::UnknownUnitKind {
                unit_id: entity.id,
                kind: entity.kind.clone(),
            })?;

        let content = UnitContent::from_stored(entity.id, kind, &entity.content)?;

        Ok(Self {
            id: entity.id,
            course_id: entity.course_id,
            name: entity.name,
            description: entity.description,
            progressable: entity.progressable,
            weight: entity.weight,
            content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn kind(&self) -> UnitKind {
        self.content.kind()
    }

    /// The unit as a client-facing document without identifier and timestamps.
    ///
    /// Serves as the base document that partial updates are merged onto.
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("_course".to_string(), Value::from(self.course_id));
        doc.insert("__t".to_string(), Value::from(self.kind().as_str()));
        doc.insert("name".to_string(), Value::from(self.name.as_str()));
        doc.insert(
            "description".to_string(),
            self.description
                .as_deref()
                .map(Value::from)
                .unwrap_or(Value::Null),
        );
        doc.insert("progressable".to_string(), Value::Bool(self.progressable));
        doc.insert("weight".to_string(), Value::from(self.weight));
        doc.insert("content".to_string(), self.content.to_value());

        Value::Object(doc)
    }

    pub fn into_dto(self) -> UnitDto {
        UnitDto {
            id: self.id,
            course_id: self.course_id,
            kind: self.kind(),
            name: self.name,
            description: self.description,
            progressable: self.progressable,
            weight: self.weight,
            content: self.content.to_value(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Validated unit fields used to insert or update a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitParams {
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub progressable: bool,
    pub weight: i32,
    pub content: UnitContent,
}

impl UnitParams {
    /// Validates a unit document against the unit schema.
    ///
    /// # Returns
    /// - `Ok(UnitParams)` - Document is a valid unit
    /// - `Err(ValidationError)` - One message per offending field path
    pub fn validate(doc: &Value) -> Result<Self, ValidationError> {
        let mut errors = BTreeMap::new();

        let Value::Object(obj) = doc else {
            errors.insert("model".to_string(), cast_message("Object", doc, "model"));
            return Err(ValidationError::new("Unit", errors));
        };

        let mut fields = Fields::new(obj, "", &mut errors);

        let course_id = fields.required_i32("_course");
        let kind = fields.kind("__t");
        let name = fields.required_string("name");
        let description = fields.optional_string("description");
        let progressable = fields.bool_or("progressable", false);
        let weight = fields.i32_or("weight", 0);

        if weight < 0 {
            fields.error(
                "weight",
                &format!(
                    "Path `weight` ({}) is less than minimum allowed value (0).",
                    weight
                ),
            );
        }

        let content = kind.and_then(|kind| {
            let raw = obj.get("content").unwrap_or(&Value::Null);
            match UnitContent::parse(kind, raw) {
                Ok(content) => Some(content),
                Err(content_errors) => {
                    errors.extend(content_errors);
                    None
                }
            }
        });

        match (course_id, name, content) {
            (Some(course_id), Some(name), Some(content)) if errors.is_empty() => Ok(Self {
                course_id,
                name,
                description,
                progressable,
                weight,
                content,
            }),
            _ => Err(ValidationError::new("Unit", errors)),
        }
    }
}

/// Overwrites the top-level fields of `base` with those submitted in `changes`.
///
/// Identifier and timestamp keys are ignored. Nested objects such as `content` are replaced
/// as a whole rather than merged.
///
/// # Returns
/// - `Some(Value)` - Merged document
/// - `None` - `changes` is not a JSON object
pub fn merge_document(base: Value, changes: &Value) -> Option<Value> {
    let Value::Object(changes) = changes else {
        return None;
    };

    let mut merged = match base {
        Value::Object(obj) => obj,
        _ => Map::new(),
    };

    for (key, value) in changes {
        if IMMUTABLE_KEYS.contains(&key.as_str()) {
            continue;
        }
        merged.insert(key.clone(), value.clone());
    }

    Some(Value::Object(merged))
}

fn cast_message(ty: &str, value: &Value, path: &str) -> String {
    format!("Cast to {} failed for value \"{}\" at path \"{}\"", ty, value, path)
}

/// Field readers over one JSON object that record errors under `prefix`ed paths.
struct Fields<'a> {
    obj: &'a Map<String, Value>,
    prefix: String,
    errors: &'a mut BTreeMap<String, String>,
}

impl<'a> Fields<'a> {
    fn new(
        obj: &'a Map<String, Value>,
        prefix: &str,
        errors: &'a mut BTreeMap<String, String>,
    ) -> Self {
        Self {
            obj,
            prefix: prefix.to_string(),
            errors,
        }
    }

    fn path(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn error(&mut self, key: &str, message: &str) {
        let path = self.path(key);
        self.errors.insert(path, message.to_string());
    }

    fn has_error(&self, key: &str) -> bool {
        self.errors.contains_key(&self.path(key))
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.obj.get(key).filter(|value| !value.is_null())
    }

    fn cast_error(&mut self, ty: &str, key: &str, value: &Value) {
        let path = self.path(key);
        let message = cast_message(ty, value, &path);
        self.errors.insert(path, message);
    }

    fn required_error(&mut self, key: &str) {
        let path = self.path(key);
        let message = format!("Path `{}` is required.", path);
        self.errors.insert(path, message);
    }

    fn required_string(&mut self, key: &str) -> Option<String> {
        match self.present(key) {
            None => {
                self.required_error(key);
                None
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.required_error(key);
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.cast_error("String", key, other);
                None
            }
        }
    }

    fn optional_string(&mut self, key: &str) -> Option<String> {
        match self.present(key) {
            None => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.cast_error("String", key, other);
                None
            }
        }
    }

    fn string_or_default(&mut self, key: &str) -> String {
        self.optional_string(key).unwrap_or_default()
    }

    fn bool_or(&mut self, key: &str, default: bool) -> bool {
        match self.present(key) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                self.cast_error("Boolean", key, other);
                default
            }
        }
    }

    fn integer(&mut self, key: &str, value: &Value) -> Option<i32> {
        match value.as_i64().and_then(|n| i32::try_from(n).ok()) {
            Some(n) => Some(n),
            None => {
                self.cast_error("Number", key, value);
                None
            }
        }
    }

    fn required_i32(&mut self, key: &str) -> Option<i32> {
        match self.present(key) {
            None => {
                self.required_error(key);
                None
            }
            Some(value) => self.integer(key, value),
        }
    }

    fn i32_or(&mut self, key: &str, default: i32) -> i32 {
        match self.present(key) {
            None => default,
            Some(value) => self.integer(key, value).unwrap_or(default),
        }
    }

    fn kind(&mut self, key: &str) -> Option<UnitKind> {
        let raw = self.required_string(key)?;

        match raw.parse::<UnitKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                let path = self.path(key);
                let message = format!("`{}` is not a valid enum value for path `{}`.", raw, path);
                self.errors.insert(path, message);
                None
            }
        }
    }

    fn array(&mut self, key: &str) -> &'a [Value] {
        match self.present(key) {
            None => &[],
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                self.cast_error("Array", key, other);
                &[]
            }
        }
    }

    fn strings(&mut self, key: &str) -> Vec<String> {
        let items = self.array(key);
        let mut out = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.clone()),
                other => self.cast_error("String", &format!("{}.{}", key, i), other),
            }
        }

        out
    }

    fn tasks(&mut self, key: &str) -> Vec<TaskItem> {
        let items = self.array(key);
        let mut tasks = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let task_prefix = format!("{}{}.{}.", self.prefix, key, i);
            let Value::Object(task_obj) = item else {
                self.cast_error("Object", &format!("{}.{}", key, i), item);
                continue;
            };

            let mut task_fields = Fields::new(task_obj, &task_prefix, self.errors);
            let name = task_fields.required_string("name").unwrap_or_default();

            let answer_items = task_fields.array("answers");
            let mut answers = Vec::with_capacity(answer_items.len());
            for (j, answer) in answer_items.iter().enumerate() {
                let Value::Object(answer_obj) = answer else {
                    task_fields.cast_error("Object", &format!("answers.{}", j), answer);
                    continue;
                };

                let answer_prefix = format!("{}answers.{}.", task_prefix, j);
                let mut answer_fields = Fields::new(answer_obj, &answer_prefix, task_fields.errors);
                answers.push(Answer {
                    value: answer_fields.required_string("value").unwrap_or_default(),
                    is_correct: answer_fields.bool_or("isCorrect", false),
                });
            }

            tasks.push(TaskItem { name, answers });
        }

        tasks
    }
}
