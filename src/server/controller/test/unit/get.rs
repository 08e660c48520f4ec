use super::*;

/// Tests any authenticated caller can read a unit.
///
/// Expected: 200 with the stored fields
#[tokio::test]
async fn returns_unit_to_student() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let (_, unit) = factory::helpers::create_lecture_with_unit(db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/units/{}", unit.id),
        Some(student()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_id"], unit.id);
    assert_eq!(body["name"], unit.name);
    assert_eq!(body["__t"], "free-text");
    assert_eq!(body["progressable"], false);
}

/// Tests a missing unit is reported as not found.
///
/// Expected: 404
#[tokio::test]
async fn returns_not_found_for_missing_unit() {
    let (_test, app) = setup().await;

    let (status, body) = send(&app, Method::GET, "/api/units/404", Some(tutor()), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Unit not found");
}

/// Tests reading requires a token.
///
/// Expected: 401
#[tokio::test]
async fn requires_authentication() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let unit = factory::create_unit(db, 1).await.unwrap();

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/units/{}", unit.id),
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests expired tokens are rejected.
#[tokio::test]
async fn rejects_expired_token() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();
    let unit = factory::create_unit(db, 1).await.unwrap();

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/units/{}", unit.id),
        Some(token::mint_expired("teacher-1", "teacher")),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests ids that cannot name a stored unit are reported as not found.
///
/// Expected: 404 with an error body for non-numeric and overflowing ids
#[tokio::test]
async fn returns_not_found_for_unparseable_id() {
    let (_test, app) = setup().await;

    for uri in ["/api/units/abc", "/api/units/99999999999"] {
        let (status, body) = send(&app, Method::GET, uri, Some(student()), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "Unit not found", "{uri}");
    }
}
