use super::*;

/// Tests deleting removes the unit and its lecture membership.
///
/// Expected: 200 {"result": true}, then 404 on GET and an empty lecture
#[tokio::test]
async fn deletes_unit_and_removes_it_from_lecture() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (lecture, unit) = factory::helpers::create_lecture_with_unit(db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/units/{}", unit.id),
        Some(teacher()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": true }));

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/units/{}", unit.id),
        Some(teacher()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, lecture_body) = send(
        &app,
        Method::GET,
        &format!("/api/lectures/{}", lecture.id),
        Some(teacher()),
        None,
    )
    .await;
    assert_eq!(lecture_body["units"], json!([]));
    assert_eq!(membership_count(db).await, 0);
}

/// Tests deleting keeps the other units of the lecture.
#[tokio::test]
async fn keeps_sibling_units() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (lecture, unit) = factory::helpers::create_lecture_with_unit(db).await.unwrap();
    let sibling = factory::create_unit(db, lecture.course_id).await.unwrap();
    factory::attach_unit(db, lecture.id, sibling.id, 1).await.unwrap();

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/units/{}", unit.id),
        Some(admin()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(unit_count(db).await, 1);
    assert_eq!(membership_count(db).await, 1);
}

/// Tests deleting a missing unit.
///
/// Expected: 404
#[tokio::test]
async fn returns_not_found_for_missing_unit() {
    let (_test, app) = setup().await;

    let (status, _) = send(&app, Method::DELETE, "/api/units/5", Some(teacher()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests students may not delete units.
///
/// Expected: 403, unit and membership kept
#[tokio::test]
async fn rejects_student() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, unit) = factory::helpers::create_lecture_with_unit(db).await.unwrap();

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/units/{}", unit.id),
        Some(student()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(unit_count(db).await, 1);
    assert_eq!(membership_count(db).await, 1);
}

/// Tests deleting by a non-numeric id is reported as not found.
#[tokio::test]
async fn returns_not_found_for_unparseable_id() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    factory::create_unit(db, 1).await.unwrap();

    let (status, body) = send(&app, Method::DELETE, "/api/units/abc", Some(teacher()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unit not found");
    assert_eq!(unit_count(db).await, 1);
}
