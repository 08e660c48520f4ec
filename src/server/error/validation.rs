use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// A document failed schema validation.
///
/// Holds one message per offending field path, e.g. `content.markdown`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub errors: BTreeMap<String, String>,
}

impl ValidationError {
    /// Builds the error for `model`, summarising every field error in the message.
    pub fn new(model: &str, errors: BTreeMap<String, String>) -> Self {
        let summary = errors
            .iter()
            .map(|(path, msg)| format!("{}: {}", path, msg))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            message: format!("{} validation failed: {}", model, summary),
            errors,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorDto {
                name: "ValidationError".to_string(),
                message: self.message,
                errors: self.errors,
            }),
        )
            .into_response()
    }
}
