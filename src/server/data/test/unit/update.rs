use super::*;

/// Tests updating replaces the mutable columns of a unit.
///
/// Expected: Ok(Model) with new name and content, unchanged created_at
#[tokio::test]
async fn updates_unit_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_unit(db, 1).await?;

    let mut params = free_text_params(1);
    params.name = "Renamed".to_string();
    params.weight = 3;
    params.content = UnitContent::FreeText {
        markdown: "## Updated".to_string(),
    };

    let repo = UnitRepository::new(db);
    let updated = repo.update(existing.id, params).await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.weight, 3);
    assert!(updated.content.contains("## Updated"));
    assert_eq!(updated.created_at, existing.created_at);

    Ok(())
}

/// Tests updating a missing unit fails without inserting one.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_to_update_missing_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);
    let result = repo.update(42, free_text_params(1)).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));
    assert!(entity::prelude::Unit::find().all(db).await?.is_empty());

    Ok(())
}
