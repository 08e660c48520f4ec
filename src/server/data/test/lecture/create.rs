use super::*;

/// Tests creating a lecture.
///
/// Expected: Ok(Model) with the submitted fields
#[tokio::test]
async fn creates_lecture() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LectureRepository::new(db);
    let lecture = repo
        .create(CreateLectureParams {
            course_id: 9,
            name: "Lifetimes".to_string(),
            description: Some("Borrow checker basics".to_string()),
        })
        .await?;

    assert_eq!(lecture.course_id, 9);
    assert_eq!(lecture.name, "Lifetimes");
    assert_eq!(repo.find_by_id(lecture.id).await?, Some(lecture));

    Ok(())
}
