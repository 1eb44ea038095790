use super::*;

/// Tests listing courses.
///
/// Expected: 200 with every course in ascending ID order
#[tokio::test]
async fn lists_courses_by_id() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();
    for id in [3, 1, 2] {
        factory::course::CourseFactory::new(db)
            .id(id)
            .build()
            .await
            .unwrap();
    }

    let (status, body) = send(&app(db), Method::GET, "/api/courses", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

/// Tests a store failure while listing.
///
/// Expected: 500 with the list failure message
#[tokio::test]
async fn reports_store_failure() {
    let test = broken_context().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::GET, "/api/courses", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to retrieve courses." }));
}
