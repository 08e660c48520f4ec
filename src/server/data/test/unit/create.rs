use super::*;

/// Tests creating a unit from validated parameters.
///
/// Verifies the discriminator and serialized content columns are written.
///
/// Expected: Ok(Model) with kind "free-text"
#[tokio::test]
async fn creates_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);
    let unit = repo.create(free_text_params(5)).await?;

    assert_eq!(unit.course_id, 5);
    assert_eq!(unit.kind, "free-text");
    assert_eq!(unit.name, fixture::unit::DEFAULT_NAME);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&unit.content).unwrap(),
        serde_json::json!({ "markdown": fixture::unit::DEFAULT_MARKDOWN })
    );
    assert_eq!(unit.created_at, unit.updated_at);

    Ok(())
}

/// Tests a created unit can be found again by id.
#[tokio::test]
async fn finds_created_unit_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);
    let created = repo.create(free_text_params(1)).await?;

    let id = created.id;

    let found = repo.find_by_id(id).await?;

    assert_eq!(found, Some(created));
    assert_eq!(repo.find_by_id(id + 100).await?, None);

    Ok(())
}
