use super::*;

/// Tests deleting an existing unit.
///
/// Expected: Ok(1) and the unit is gone
#[tokio::test]
async fn deletes_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_unit(db, 1).await?;

    let repo = UnitRepository::new(db);
    let deleted = repo.delete(unit.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(unit.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing unit affects no rows.
#[tokio::test]
async fn deleting_missing_unit_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UnitRepository::new(db);

    assert_eq!(repo.delete(7).await?, 0);

    Ok(())
}
