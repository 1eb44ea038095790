use super::*;

/// Tests creating a course with a free ID.
///
/// Expected: Ok(Course) matching the params
#[tokio::test]
async fn creates_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = SqlCourseStore::new(db.clone());

    let service = CourseService::new(&store);
    let created = service
        .create(CreateCourseParams {
            id: 1,
            title: "A".to_string(),
            description: "d".to_string(),
            estimated_time: 10,
        })
        .await?;

    assert_eq!(
        created,
        Course {
            id: 1,
            title: "A".to_string(),
            description: "d".to_string(),
            estimated_time: 10,
        }
    );
    assert_eq!(service.get_by_id(1).await?, Some(created));

    Ok(())
}

/// Tests creating a course whose ID is taken.
///
/// Expected: Err(AlreadyExists) and the stored course unchanged
#[tokio::test]
async fn rejects_taken_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::course::CourseFactory::new(db).id(7).build().await?;
    let store = SqlCourseStore::new(db.clone());

    let service = CourseService::new(&store);
    let result = service
        .create(CreateCourseParams {
            id: 7,
            title: "Other".to_string(),
            description: "d".to_string(),
            estimated_time: 10,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::CourseErr(CourseError::AlreadyExists(7)))
    ));
    assert_eq!(
        service.get_by_id(7).await?.map(|c| c.title),
        Some(existing.title)
    );

    Ok(())
}
