use super::*;

/// Tests a teacher creates a unit that is appended to the lecture exactly once.
///
/// Expected: 201 with the unit DTO, one membership in the lecture
#[tokio::test]
async fn creates_unit_and_appends_to_lecture() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let lecture = factory::create_lecture(db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some(json!({
            "lectureId": lecture.id,
            "model": fixture::unit::free_text_model(lecture.course_id),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["__t"], "free-text");
    assert_eq!(body["_course"], lecture.course_id);
    assert_eq!(body["content"]["markdown"], fixture::unit::DEFAULT_MARKDOWN);
    assert!(body["_id"].is_i64());
    assert!(body["createdAt"].is_string());

    let (_, lecture_body) = send(
        &app,
        Method::GET,
        &format!("/api/lectures/{}", lecture.id),
        Some(student()),
        None,
    )
    .await;
    let units = lecture_body["units"].as_array().unwrap();
    assert_eq!(units.len(), 1);
    assert_eq!(units[0]["_id"], body["_id"]);
}

/// Tests admins may create units too and units are appended in order.
#[tokio::test]
async fn appends_units_in_creation_order() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let lecture = factory::create_lecture(db).await.unwrap();

    let mut ids = Vec::new();
    for model in [
        fixture::unit::code_kata_model(lecture.course_id),
        fixture::unit::task_model(lecture.course_id),
        fixture::unit::video_model(lecture.course_id),
    ] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/units",
            Some(admin()),
            Some(json!({ "lectureId": lecture.id, "model": model })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["_id"].clone());
    }

    let (_, lecture_body) = send(
        &app,
        Method::GET,
        &format!("/api/lectures/{}", lecture.id),
        Some(teacher()),
        None,
    )
    .await;
    let listed: Vec<Value> = lecture_body["units"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["_id"].clone())
        .collect();
    assert_eq!(listed, ids);
}

/// Tests a payload without lectureId is rejected before any write.
///
/// Expected: 400 "No lecture ID was submitted."
#[tokio::test]
async fn rejects_missing_lecture_id() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some(json!({ "model": fixture::unit::free_text_model(1) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No lecture ID was submitted.");
    assert_eq!(unit_count(db).await, 0);
}

/// Tests an empty lectureId counts as missing.
///
/// Expected: 400 "No lecture ID was submitted."
#[tokio::test]
async fn rejects_empty_lecture_id() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some(json!({ "lectureId": "", "model": fixture::unit::free_text_model(1) })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No lecture ID was submitted.");
    assert_eq!(unit_count(db).await, 0);
}

/// Tests a lectureId sent as a numeric string is accepted.
///
/// Expected: 201 and one membership in the lecture
#[tokio::test]
async fn accepts_lecture_id_as_string() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let lecture = factory::create_lecture(db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some(json!({
            "lectureId": lecture.id.to_string(),
            "model": fixture::unit::free_text_model(lecture.course_id),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["_id"].is_i64());
    assert_eq!(membership_count(db).await, 1);
}

/// Tests a payload without model is rejected before any write.
///
/// Expected: 400 "No unit was submitted."
#[tokio::test]
async fn rejects_missing_model() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let lecture = factory::create_lecture(db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some(json!({ "lectureId": lecture.id })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No unit was submitted.");
    assert_eq!(unit_count(db).await, 0);
    assert_eq!(membership_count(db).await, 0);
}

/// Tests a model without _course is rejected before any write.
///
/// Expected: 400 "Unit has no _course set"
#[tokio::test]
async fn rejects_model_without_course() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let lecture = factory::create_lecture(db).await.unwrap();

    let mut model = fixture::unit::free_text_model(1);
    model.as_object_mut().unwrap().remove("_course");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some(json!({ "lectureId": lecture.id, "model": model })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unit has no _course set");
    assert_eq!(unit_count(db).await, 0);
}

/// Tests schema validation failures keep their field-error body.
///
/// Expected: 400 with name "ValidationError" and a message per field
#[tokio::test]
async fn returns_validation_errors_unchanged() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let lecture = factory::create_lecture(db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some(json!({
            "lectureId": lecture.id,
            "model": { "_course": lecture.course_id, "__t": "video" },
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["name"], "ValidationError");
    assert_eq!(body["errors"]["name"], "Path `name` is required.");
    assert!(body["errors"]["content.files"].is_string());
    assert_eq!(unit_count(db).await, 0);
}

/// Tests creating a unit for a missing lecture rolls back the unit insert.
///
/// Expected: 400 and no orphan unit
#[tokio::test]
async fn missing_lecture_leaves_no_orphan_unit() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some(json!({
            "lectureId": 999,
            "model": fixture::unit::free_text_model(1),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("999"));
    assert_eq!(unit_count(db).await, 0);
    assert_eq!(membership_count(db).await, 0);
}

/// Tests students are rejected before the body is looked at.
///
/// Expected: 403 even though the payload would fail validation
#[tokio::test]
async fn rejects_student_before_validation() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/units",
        Some(student()),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(unit_count(db).await, 0);
}

/// Tests anonymous callers are rejected even with a malformed body.
///
/// Expected: 401
#[tokio::test]
async fn rejects_anonymous_caller() {
    let (_test, app) = setup().await;

    let (status, _) = send_raw(
        &app,
        Method::POST,
        "/api/units",
        None,
        Some("{not json".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests malformed JSON bodies are reported as bad requests.
#[tokio::test]
async fn rejects_malformed_json() {
    let (_test, app) = setup().await;

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/api/units",
        Some(teacher()),
        Some("{not json".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
