use super::*;

/// Tests submitted fields overwrite the stored ones while the rest is kept.
///
/// Expected: 200 with new name, previous content and weight
#[tokio::test]
async fn overwrites_submitted_fields() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let unit = factory::unit::UnitFactory::new(db, 1)
        .weight(4)
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/units/{}", unit.id),
        Some(teacher()),
        Some(json!({ "name": "Renamed", "progressable": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["progressable"], true);
    assert_eq!(body["weight"], 4);
    assert_eq!(body["content"]["markdown"], fixture::unit::DEFAULT_MARKDOWN);
}

/// Tests identifier and timestamps cannot be overwritten.
#[tokio::test]
async fn ignores_identifier_and_timestamps() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let unit = factory::create_unit(db, 1).await.unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/units/{}", unit.id),
        Some(admin()),
        Some(json!({
            "_id": unit.id + 50,
            "createdAt": "2001-01-01T00:00:00Z",
            "name": "Kept id",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_id"], unit.id);
    assert_ne!(body["createdAt"], "2001-01-01T00:00:00Z");
    assert_eq!(unit_count(db).await, 1);
}

/// Tests switching the discriminator revalidates the content.
///
/// Expected: 400 validation error, stored unit unchanged
#[tokio::test]
async fn revalidates_merged_document() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let unit = factory::create_unit(db, 1).await.unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/units/{}", unit.id),
        Some(teacher()),
        Some(json!({ "__t": "video", "weight": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["name"], "ValidationError");
    assert!(body["errors"]["weight"].is_string());
    assert!(body["errors"]["content.files"].is_string());

    let stored = entity::prelude::Unit::find_by_id(unit.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, unit);
}

/// Tests updating a missing unit changes nothing.
///
/// Expected: 404, no unit created
#[tokio::test]
async fn returns_not_found_for_missing_unit() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/units/77",
        Some(teacher()),
        Some(json!({ "name": "Ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(unit_count(db).await, 0);
}

/// Tests non-object bodies are bad requests.
#[tokio::test]
async fn rejects_non_object_changes() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let unit = factory::create_unit(db, 1).await.unwrap();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/units/{}", unit.id),
        Some(teacher()),
        Some(json!(["name"])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests tutors may not update units.
///
/// Expected: 403, stored unit unchanged
#[tokio::test]
async fn rejects_tutor() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let unit = factory::create_unit(db, 1).await.unwrap();

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/units/{}", unit.id),
        Some(tutor()),
        Some(json!({ "name": "Hijacked" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    let stored = entity::prelude::Unit::find_by_id(unit.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, unit.name);
}
