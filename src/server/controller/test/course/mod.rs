use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{data::course::sql::SqlCourseStore, router::router, state::AppState};

mod create;
mod delete;
mod get;
mod list;

/// Builds the application router over the test database.
fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(Arc::new(SqlCourseStore::new(db.clone()))))
}

/// Test context with the course table created.
async fn course_context() -> TestContext {
    TestBuilder::new()
        .with_course_tables()
        .build()
        .await
        .unwrap()
}

/// Test context with no tables, so every store call fails.
async fn broken_context() -> TestContext {
    TestBuilder::new().build().await.unwrap()
}

/// Sends a request and returns the status and JSON body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Seeds course 1 as `{id:1, title:"A", description:"d", estimatedTime:10}`.
async fn seed_course_one(db: &DatabaseConnection) {
    factory::course::CourseFactory::new(db)
        .id(1)
        .title("A")
        .description("d")
        .estimated_time(10)
        .build()
        .await
        .unwrap();
}

fn course_one() -> Value {
    json!({ "id": 1, "title": "A", "description": "d", "estimatedTime": 10 })
}
