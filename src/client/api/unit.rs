use serde_json::Value;

use crate::{
    client::model::error::ApiError,
    model::unit::{CreateUnitDto, DeleteResultDto, UnitDto},
};

use super::helper::{delete, get, parse_response, post, put, send_json, send_request};

/// Get a unit by ID
pub async fn get_unit(token: &str, id: i32) -> Result<UnitDto, ApiError> {
    let url = format!("/api/units/{}", id);

    let response = send_request(get(&url, token)).await?;
    parse_response(response).await
}

/// Create a unit from a raw unit document and append it to the lecture
pub async fn create_unit(token: &str, lecture_id: i32, model: Value) -> Result<UnitDto, ApiError> {
    let payload = CreateUnitDto {
        lecture_id: Some(Value::from(lecture_id)),
        model: Some(model),
    };

    let response = send_json(post("/api/units", token), &payload).await?;
    parse_response(response).await
}

/// Overwrite the given top-level fields of a unit
pub async fn update_unit(token: &str, id: i32, changes: &Value) -> Result<UnitDto, ApiError> {
    let url = format!("/api/units/{}", id);

    let response = send_json(put(&url, token), changes).await?;
    parse_response(response).await
}

/// Delete a unit and remove it from its lecture
pub async fn delete_unit(token: &str, id: i32) -> Result<DeleteResultDto, ApiError> {
    let url = format!("/api/units/{}", id);

    let response = send_request(delete(&url, token)).await?;
    parse_response(response).await
}
