//! Course storage.
//!
//! `CourseStore` is the seam between the service layer and the database. Each backend
//! maps its own records to the domain `Course` at this boundary, so services and
//! controllers never see entity or document types.

#[cfg(feature = "mongo")]
pub mod mongo;
pub mod sql;

#[cfg(test)]
mod test;

use async_trait::async_trait;

use crate::server::{error::AppError, model::course::Course};

/// Store operations backing the course resource.
///
/// Implementations must make `find_and_replace` and `find_and_delete` atomic with
/// respect to other single-course operations.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Finds the course stored under `id`.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that ID
    /// - `Err(AppError)` - Store failure
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Returns every stored course ordered by ascending ID.
    async fn get_all(&self) -> Result<Vec<Course>, AppError>;

    /// Checks whether a course is stored under `id` without loading other courses.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Stores a new course.
    ///
    /// Fails with a store error if the ID is already taken.
    async fn insert(&self, course: Course) -> Result<Course, AppError>;

    /// Replaces the full content of the course stored under `id`.
    ///
    /// The replacement is always stored under `id`, whatever `replacement.id` holds.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The course as it was before the replacement
    /// - `Ok(None)` - No course with that ID; nothing was written
    /// - `Err(AppError)` - Store failure
    async fn find_and_replace(&self, id: i64, replacement: Course)
        -> Result<Option<Course>, AppError>;

    /// Deletes the course stored under `id`.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The deleted course
    /// - `Ok(None)` - No course with that ID; nothing was deleted
    /// - `Err(AppError)` - Store failure
    async fn find_and_delete(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Closes the underlying connections. No further calls may be made afterwards.
    async fn shutdown(&self) -> Result<(), AppError>;
}
