use super::*;

/// Tests deleting a stored course.
///
/// Expected: 200 with the confirmation message, then GET returns 404
#[tokio::test]
async fn deletes_course() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();
    seed_course_one(db).await;
    let app = app(db);

    let (status, body) = send(&app, Method::DELETE, "/api/courses/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Course with ID 1 deleted." }));

    let (status, _) = send(&app, Method::GET, "/api/courses/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests deleting the same course twice.
///
/// Expected: 200 then 404
#[tokio::test]
async fn second_delete_returns_not_found() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();
    seed_course_one(db).await;
    let app = app(db);

    let (first, _) = send(&app, Method::DELETE, "/api/courses/1", None).await;
    let (second, body) = send(&app, Method::DELETE, "/api/courses/1", None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Course not found." }));
}

/// Tests deleting an ID with no stored course.
///
/// Expected: 404 and the collection unchanged
#[tokio::test]
async fn leaves_collection_unchanged_when_missing() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();
    seed_course_one(db).await;
    let app = app(db);

    let (status, _) = send(&app, Method::DELETE, "/api/courses/9", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/courses", None).await;
    assert_eq!(body, json!([course_one()]));
}

/// Tests deleting with a non-numeric ID.
///
/// Expected: 400 with the invalid-ID message
#[tokio::test]
async fn rejects_non_numeric_id() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::DELETE, "/api/courses/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid course ID." }));
}

/// Tests a store failure while deleting.
///
/// Expected: 500 with the delete failure message
#[tokio::test]
async fn reports_store_failure() {
    let test = broken_context().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::DELETE, "/api/courses/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to delete course." }));
}
