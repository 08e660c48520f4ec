//! HTTP request handlers.
//!
//! Controllers authorize the caller through extractors, convert request DTOs into service
//! parameters and turn domain models back into response DTOs.

pub mod lecture;
pub mod unit;

use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::AppError;

/// Resolves a numeric path id, reporting ids that cannot name a stored row as not found.
fn path_id(id: Result<Path<i32>, PathRejection>, not_found: &str) -> Result<i32, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}

#[cfg(test)]
mod test;
