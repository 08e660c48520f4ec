use super::*;

/// Tests units come back in collection order rather than insertion order.
///
/// Expected: Ok(vec) ordered by position
#[tokio::test]
async fn returns_units_in_position_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lecture = factory::create_lecture(db).await?;
    let first = factory::create_unit(db, lecture.course_id).await?;
    let second = factory::create_unit(db, lecture.course_id).await?;
    factory::attach_unit(db, lecture.id, second.id, 0).await?;
    factory::attach_unit(db, lecture.id, first.id, 1).await?;

    let repo = UnitRepository::new(db);
    let units = repo.find_by_lecture(lecture.id).await?;

    let ids: Vec<i32> = units.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests units of other lectures are not returned.
#[tokio::test]
async fn excludes_units_of_other_lectures() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (lecture, unit) = factory::helpers::create_lecture_with_unit(db).await?;
    let (other_lecture, _) = factory::helpers::create_lecture_with_unit(db).await?;
    let empty = factory::create_lecture(db).await?;

    let repo = UnitRepository::new(db);

    let units = repo.find_by_lecture(lecture.id).await?;
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].id, unit.id);
    assert_eq!(repo.find_by_lecture(other_lecture.id).await?.len(), 1);
    assert!(repo.find_by_lecture(empty.id).await?.is_empty());

    Ok(())
}
