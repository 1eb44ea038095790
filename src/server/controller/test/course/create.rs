use super::*;

/// Tests creating a course and reading it back.
///
/// Expected: 201 with the course, then GET returns it
#[tokio::test]
async fn creates_course() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let (status, body) = send(&app, Method::POST, "/api/courses", Some(course_one())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, course_one());

    let (status, body) = send(&app, Method::GET, "/api/courses/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, course_one());
}

/// Tests creating a course whose ID is taken.
///
/// Expected: 409 with the conflict message
#[tokio::test]
async fn rejects_duplicate_id() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();
    seed_course_one(db).await;

    let (status, body) = send(&app(db), Method::POST, "/api/courses", Some(course_one())).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body,
        json!({ "error": "Course with ID 1 already exists." })
    );
}

/// Tests creating a course without an ID.
///
/// Expected: 400 with an invalid-data message
#[tokio::test]
async fn requires_id() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();

    let course = json!({ "title": "A", "description": "d", "estimatedTime": 10 });
    let (status, body) = send(&app(db), Method::POST, "/api/courses", Some(course)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid course data: "));
}

/// Tests a store failure while creating.
///
/// Expected: 500 with the create failure message
#[tokio::test]
async fn reports_store_failure() {
    let test = broken_context().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::POST, "/api/courses", Some(course_one())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create course." }));
}
