use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        unit::{CreateUnitDto, DeleteResultDto, UnitDto},
    },
    server::{
        controller::path_id,
        error::AppError,
        middleware::auth::{AuthUser, ContentManager},
        service::unit::UnitService,
        state::AppState,
    },
};

/// Tag for grouping unit endpoints in OpenAPI documentation
pub static UNIT_TAG: &str = "unit";

/// Get a unit by ID.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The unit
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No unit with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(
        ("id" = i32, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved unit", body = UnitDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_unit(
    State(state): State<AppState>,
    _user: AuthUser,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "Unit not found")?;
    let service = UnitService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(unit) => Ok((StatusCode::OK, Json(unit.into_dto()))),
        None => Err(AppError::NotFound("Unit not found".to_string())),
    }
}

/// Create a unit and append it to a lecture.
///
/// The body carries the target `lectureId` and the unit document as `model`. Missing
/// fields are reported before anything is written.
///
/// # Access Control
/// - `ManageContent` - Teachers and admins
///
/// # Returns
/// - `201 Created` - The created unit
/// - `400 Bad Request` - Missing fields, schema validation failure or unknown lecture
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is neither teacher nor admin
#[utoipa::path(
    post,
    path = "/api/units",
    tag = UNIT_TAG,
    request_body = CreateUnitDto,
    responses(
        (status = 201, description = "Successfully created unit", body = UnitDto),
        (status = 400, description = "Invalid request or unit document", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller may not manage content", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_unit(
    State(state): State<AppState>,
    ContentManager(_user): ContentManager,
    payload: Result<Json<CreateUnitDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let (lecture_id, model) = check_post_payload(payload)?;

    let service = UnitService::new(&state.db);

    let unit = service
        .create(lecture_id, &model)
        .await
        .map_err(AppError::into_write_error)?;

    Ok((StatusCode::CREATED, Json(unit.into_dto())))
}

/// Update a unit by overwriting the submitted top-level fields.
///
/// `_id`, `createdAt` and `updatedAt` are ignored. The merged document is validated again
/// before it is stored.
///
/// # Access Control
/// - `ManageContent` - Teachers and admins
///
/// # Returns
/// - `200 OK` - The updated unit
/// - `400 Bad Request` - Malformed body or schema validation failure
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is neither teacher nor admin
/// - `404 Not Found` - No unit with this ID
#[utoipa::path(
    put,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(
        ("id" = i32, Path, description = "Unit ID")
    ),
    request_body(content = Object, description = "Unit fields to overwrite"),
    responses(
        (status = 200, description = "Successfully updated unit", body = UnitDto),
        (status = 400, description = "Invalid unit document", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller may not manage content", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_unit(
    State(state): State<AppState>,
    ContentManager(_user): ContentManager,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "Unit not found")?;
    let Json(changes) = payload?;

    let service = UnitService::new(&state.db);

    let unit = service
        .update(id, &changes)
        .await
        .map_err(AppError::into_write_error)?;

    match unit {
        Some(unit) => Ok((StatusCode::OK, Json(unit.into_dto()))),
        None => Err(AppError::NotFound("Unit not found".to_string())),
    }
}

/// Delete a unit and remove it from every lecture.
///
/// # Access Control
/// - `ManageContent` - Teachers and admins
///
/// # Returns
/// - `200 OK` - `{ "result": true }`
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is neither teacher nor admin
/// - `404 Not Found` - No unit with this ID
#[utoipa::path(
    delete,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(
        ("id" = i32, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted unit", body = DeleteResultDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller may not manage content", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_unit(
    State(state): State<AppState>,
    ContentManager(_user): ContentManager,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "Unit not found")?;
    let service = UnitService::new(&state.db);

    if service.delete(id).await? {
        Ok((StatusCode::OK, Json(DeleteResultDto { result: true })))
    } else {
        Err(AppError::NotFound("Unit not found".to_string()))
    }
}

/// Checks the create payload for a lecture id, a unit document and its course.
///
/// `0`, `null`, `false` and `""` count as missing.
fn check_post_payload(payload: CreateUnitDto) -> Result<(i32, Value), AppError> {
    let Some(raw_lecture_id) = payload.lecture_id.filter(is_truthy) else {
        return Err(AppError::BadRequest(
            "No lecture ID was submitted.".to_string(),
        ));
    };

    let Some(model) = payload.model.filter(is_truthy) else {
        return Err(AppError::BadRequest("No unit was submitted.".to_string()));
    };

    if !model.get("_course").is_some_and(is_truthy) {
        return Err(AppError::BadRequest("Unit has no _course set".to_string()));
    }

    // An id that cannot be stored names no lecture.
    let Some(lecture_id) = parse_lecture_id(&raw_lecture_id) else {
        return Err(AppError::BadRequest(format!(
            "Lecture {} does not exist",
            raw_lecture_id
        )));
    };

    Ok((lecture_id, model))
}

/// Reads a lecture id sent as a JSON number or a numeric string.
fn parse_lecture_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
