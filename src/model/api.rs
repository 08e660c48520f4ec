use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when a submitted unit fails schema validation.
///
/// `errors` maps each offending field path to its message, e.g.
/// `"name" -> "Path `name` is required."`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ValidationErrorDto {
    pub name: String,
    pub message: String,
    pub errors: BTreeMap<String, String>,
}
