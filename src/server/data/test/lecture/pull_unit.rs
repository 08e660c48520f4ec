use super::*;

/// Tests pulling a unit removes its membership and leaves other units alone.
///
/// Expected: Ok(1), sibling membership intact
#[tokio::test]
async fn removes_unit_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (lecture, unit) = factory::helpers::create_lecture_with_unit(db).await?;
    let sibling = factory::create_unit(db, lecture.course_id).await?;
    factory::attach_unit(db, lecture.id, sibling.id, 1).await?;

    let repo = LectureRepository::new(db);
    let removed = repo.pull_unit(unit.id).await?;

    assert_eq!(removed, 1);
    let remaining = entity::prelude::LectureUnit::find()
        .filter(entity::lecture_unit::Column::LectureId.eq(lecture.id))
        .all(db)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].unit_id, sibling.id);

    Ok(())
}

/// Tests pulling a unit that belongs to no lecture is a no-op.
#[tokio::test]
async fn pulling_detached_unit_removes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let unit = factory::create_unit(db, 1).await?;

    let repo = LectureRepository::new(db);

    assert_eq!(repo.pull_unit(unit.id).await?, 0);

    Ok(())
}
