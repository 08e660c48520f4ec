use crate::{
    client::model::error::ApiError,
    model::lecture::{CreateLectureDto, LectureDto},
};

use super::helper::{get, parse_response, post, send_json, send_request};

/// Get a lecture with its units in order
pub async fn get_lecture(token: &str, id: i32) -> Result<LectureDto, ApiError> {
    let url = format!("/api/lectures/{}", id);

    let response = send_request(get(&url, token)).await?;
    parse_response(response).await
}

/// Create an empty lecture
pub async fn create_lecture(
    token: &str,
    course_id: i32,
    name: String,
    description: Option<String>,
) -> Result<LectureDto, ApiError> {
    let payload = CreateLectureDto {
        course_id,
        name,
        description,
    };

    let response = send_json(post("/api/lectures", token), &payload).await?;
    parse_response(response).await
}
