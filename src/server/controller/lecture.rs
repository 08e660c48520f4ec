use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        lecture::{CreateLectureDto, LectureDto},
    },
    server::{
        controller::path_id,
        error::AppError,
        middleware::auth::{AuthUser, ContentManager},
        model::lecture::CreateLectureParams,
        service::lecture::LectureService,
        state::AppState,
    },
};

/// Tag for grouping lecture endpoints in OpenAPI documentation
pub static LECTURE_TAG: &str = "lecture";

/// Create a new, empty lecture.
///
/// # Access Control
/// - `ManageContent` - Teachers and admins
///
/// # Returns
/// - `201 Created` - The created lecture
/// - `400 Bad Request` - Malformed body or blank name
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is neither teacher nor admin
#[utoipa::path(
    post,
    path = "/api/lectures",
    tag = LECTURE_TAG,
    request_body = CreateLectureDto,
    responses(
        (status = 201, description = "Successfully created lecture", body = LectureDto),
        (status = 400, description = "Invalid lecture data", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Caller may not manage content", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_lecture(
    State(state): State<AppState>,
    ContentManager(_user): ContentManager,
    payload: Result<Json<CreateLectureDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let params = CreateLectureParams::from_dto(payload)?;

    let service = LectureService::new(&state.db);

    let lecture = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(lecture.into_dto())))
}

/// Get a lecture with its units in collection order.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The lecture with populated units
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No lecture with this ID
#[utoipa::path(
    get,
    path = "/api/lectures/{id}",
    tag = LECTURE_TAG,
    params(
        ("id" = i32, Path, description = "Lecture ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved lecture", body = LectureDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Lecture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_lecture(
    State(state): State<AppState>,
    _user: AuthUser,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(id, "Lecture not found")?;
    let service = LectureService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(lecture) => Ok((StatusCode::OK, Json(lecture.into_dto()))),
        None => Err(AppError::NotFound("Lecture not found".to_string())),
    }
}
