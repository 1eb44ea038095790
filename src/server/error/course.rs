use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Client-facing failures of the course resource.
#[derive(Error, Debug)]
pub enum CourseError {
    /// The `id` path parameter is not a base-10 integer.
    #[error("Invalid course ID '{0}'")]
    InvalidId(String),

    /// The request body is not valid JSON or does not match the course schema.
    #[error("Invalid course data: {0}")]
    InvalidBody(String),

    /// The body carries an `id` that differs from the one in the path.
    #[error("Course ID in body ({body}) does not match path ({path})")]
    IdMismatch { path: i64, body: i64 },

    /// No course is stored under the requested ID.
    #[error("Course {0} not found")]
    NotFound(i64),

    /// A course with this ID is already stored.
    #[error("Course with ID {0} already exists.")]
    AlreadyExists(i64),
}

/// Converts course errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidId`, `InvalidBody` and `IdMismatch`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `AlreadyExists`
impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid course ID.".to_string()),
            Self::InvalidBody(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::IdMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                "Course ID in body does not match path.".to_string(),
            ),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Course not found.".to_string()),
            Self::AlreadyExists(_) => (StatusCode::CONFLICT, self.to_string()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
