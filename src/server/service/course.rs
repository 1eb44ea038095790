//! Course service for business logic.
//!
//! This module provides the `CourseService`, which applies the resource rules on top of a
//! `CourseStore`: replacements are keyed by the path ID, create refuses taken IDs, and
//! lookups report absence as `None` for controllers to map.

use crate::server::{
    data::course::CourseStore,
    error::{course::CourseError, AppError},
    model::course::{Course, CreateCourseParams, ReplaceCourseParams},
};

/// Service providing business logic for course management.
pub struct CourseService<'a> {
    store: &'a dyn CourseStore,
}

impl<'a> CourseService<'a> {
    /// Creates a new CourseService instance.
    ///
    /// # Arguments
    /// - `store` - Course store to operate on
    pub fn new(store: &'a dyn CourseStore) -> Self {
        Self { store }
    }

    /// Retrieves a course by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that ID
    /// - `Err(AppError)` - Store failure
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        self.store.find_by_id(id).await
    }

    /// Retrieves all courses ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        self.store.get_all().await
    }

    /// Creates a new course.
    ///
    /// # Returns
    /// - `Ok(Course)` - The stored course
    /// - `Err(AppError::CourseErr(AlreadyExists))` - A course with that ID is already stored
    /// - `Err(AppError)` - Store failure
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        if self.store.exists(params.id).await? {
            return Err(CourseError::AlreadyExists(params.id).into());
        }

        self.store.insert(params.into_course()).await
    }

    /// Replaces the full content of a course, keeping its ID.
    ///
    /// A body ID that differs from the path ID is rejected before the store is touched.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The course as it was before the replacement
    /// - `Ok(None)` - No course with that ID; nothing was written
    /// - `Err(AppError::CourseErr(IdMismatch))` - Body ID differs from path ID
    /// - `Err(AppError)` - Store failure
    pub async fn replace(&self, params: ReplaceCourseParams) -> Result<Option<Course>, AppError> {
        if let Some(body_id) = params.body_id {
            if body_id != params.id {
                return Err(CourseError::IdMismatch {
                    path: params.id,
                    body: body_id,
                }
                .into());
            }
        }

        let id = params.id;
        self.store.find_and_replace(id, params.into_course()).await
    }

    /// Deletes a course by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The deleted course
    /// - `Ok(None)` - No course with that ID; nothing was deleted
    /// - `Err(AppError)` - Store failure
    pub async fn delete(&self, id: i64) -> Result<Option<Course>, AppError> {
        self.store.find_and_delete(id).await
    }
}
