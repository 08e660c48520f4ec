use super::*;

/// Tests pushing units appends them at increasing positions.
///
/// Expected: positions 0 then 1
#[tokio::test]
async fn appends_units_to_end_of_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::create_lecture(db).await?;
    let first = factory::create_unit(db, lecture.course_id).await?;
    let second = factory::create_unit(db, lecture.course_id).await?;

    let repo = LectureRepository::new(db);
    let a = repo.push_unit(lecture.id, first.id).await?;
    let b = repo.push_unit(lecture.id, second.id).await?;

    assert_eq!(a.position, 0);
    assert_eq!(b.position, 1);

    Ok(())
}

/// Tests positions continue after the highest existing position.
#[tokio::test]
async fn continues_after_highest_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::create_lecture(db).await?;
    let existing = factory::create_unit(db, lecture.course_id).await?;
    factory::attach_unit(db, lecture.id, existing.id, 7).await?;
    let unit = factory::create_unit(db, lecture.course_id).await?;

    let repo = LectureRepository::new(db);
    let membership = repo.push_unit(lecture.id, unit.id).await?;

    assert_eq!(membership.position, 8);

    Ok(())
}

/// Tests a unit cannot be pushed to a second lecture.
///
/// Expected: Err(DbErr) from the unique unit_id constraint
#[tokio::test]
async fn rejects_unit_already_in_a_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, unit) = factory::helpers::create_lecture_with_unit(db).await?;
    let other = factory::create_lecture(db).await?;

    let repo = LectureRepository::new(db);
    let result = repo.push_unit(other.id, unit.id).await;

    assert!(result.is_err());

    Ok(())
}
