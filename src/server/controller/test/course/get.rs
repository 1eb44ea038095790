use super::*;

/// Tests fetching a stored course.
///
/// Expected: 200 with exactly the stored document
#[tokio::test]
async fn returns_stored_course() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();
    seed_course_one(db).await;

    let (status, body) = send(&app(db), Method::GET, "/api/courses/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, course_one());
}

/// Tests fetching an ID with no stored course.
///
/// Expected: 404 with the not-found message
#[tokio::test]
async fn returns_not_found_for_missing_course() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::GET, "/api/courses/2", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Course not found." }));
}

/// Tests fetching with an ID that has trailing non-digits.
///
/// Expected: the leading integer addresses the course, 200 with course 1
#[tokio::test]
async fn reads_leading_integer_of_id() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();
    seed_course_one(db).await;

    for uri in ["/api/courses/1abc", "/api/courses/1.5", "/api/courses/%201"] {
        let (status, body) = send(&app(db), Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, course_one(), "{uri}");
    }
}

/// Tests fetching with a non-numeric ID.
///
/// Expected: 400 with the invalid-ID message
#[tokio::test]
async fn rejects_non_numeric_id() {
    let test = course_context().await;
    let db = test.db.as_ref().unwrap();

    for uri in ["/api/courses/abc", "/api/courses/x1", "/api/courses/-"] {
        let (status, body) = send(&app(db), Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "Invalid course ID." }), "{uri}");
    }
}

/// Tests a store failure while fetching.
///
/// Expected: 500 with the retrieve failure message
#[tokio::test]
async fn reports_store_failure() {
    let test = broken_context().await;
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::GET, "/api/courses/1", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to retrieve course." }));
}
