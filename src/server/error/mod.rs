//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod course;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, course::CourseError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Client errors (`CourseErr`) handle their own
/// response mapping; everything else becomes a 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Invalid request or missing resource.
    ///
    /// Delegates to `CourseError::into_response()` for status code mapping
    /// (400 Bad Request, 404 Not Found, 409 Conflict).
    #[error(transparent)]
    CourseErr(#[from] CourseError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Document store error from the MongoDB driver.
    #[cfg(feature = "mongo")]
    #[error(transparent)]
    MongoErr(#[from] mongodb::error::Error),

    /// Socket or listener failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal failure of a specific resource operation.
    ///
    /// `message` is safe to show to clients ("Failed to retrieve course."); `source`
    /// holds the underlying failure and is only logged.
    #[error("{message} {source}")]
    OperationFailed {
        message: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Attaches a client-facing message to internal failures.
    ///
    /// Client errors and already-annotated failures are returned unchanged so their
    /// status code and message survive.
    pub fn context(self, message: &'static str) -> Self {
        match self {
            Self::CourseErr(_) | Self::OperationFailed { .. } => self,
            source => Self::OperationFailed {
                message,
                source: Box::new(source),
            },
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Internal errors are logged with full details but return generic messages to avoid
/// information leakage.
///
/// # Returns
/// - Variable - For `CourseErr`, delegated to `CourseError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::CourseErr(err) => err.into_response(),
            Self::OperationFailed { message, source } => {
                tracing::error!("{} {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: message.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
