use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Discriminator of the unit content variants, serialized as `__t`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum UnitKind {
    FreeText,
    CodeKata,
    Task,
    File,
    Video,
}

impl UnitKind {
    pub const ALL: [UnitKind; 5] = [
        UnitKind::FreeText,
        UnitKind::CodeKata,
        UnitKind::Task,
        UnitKind::File,
        UnitKind::Video,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::FreeText => "free-text",
            UnitKind::CodeKata => "code-kata",
            UnitKind::Task => "task",
            UnitKind::File => "file",
            UnitKind::Video => "video",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("`{}` is not a valid unit type", s))
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UnitDto {
    #[serde(rename = "_id")]
    pub id: i32,
    #[serde(rename = "_course")]
    pub course_id: i32,
    #[serde(rename = "__t")]
    pub kind: UnitKind,
    pub name: String,
    pub description: Option<String>,
    pub progressable: bool,
    pub weight: i32,
    /// Variant-specific content, e.g. `{"markdown": "..."}` for free-text units.
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub content: serde_json::Value,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/units`.
///
/// Both fields are kept as raw JSON at the wire level so that a missing or empty value is
/// reported with a descriptive message instead of a generic deserialization failure. The
/// lecture id may be sent as a number or a numeric string.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateUnitDto {
    #[serde(rename = "lectureId", default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<i32>))]
    pub lecture_id: Option<serde_json::Value>,
    /// Unit document validated against the unit schema.
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub model: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeleteResultDto {
    pub result: bool,
}
