//! Course factory for creating test course rows.
//!
//! Provides factory methods for creating course entities with sensible defaults. The
//! factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db)
///     .id(1)
///     .title("A")
///     .description("d")
///     .estimated_time(10)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    title: String,
    description: String,
    estimated_time: i64,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented counter value
    /// - title: `"Course {id}"`
    /// - description: `"Description for course {id}"`
    /// - estimated_time: `60`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CourseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            title: format!("Course {}", id),
            description: format!("Description for course {}", id),
            estimated_time: 60,
        }
    }

    /// Sets the course ID.
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the course title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the course description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the estimated time.
    pub fn estimated_time(mut self, estimated_time: i64) -> Self {
        self.estimated_time = estimated_time;
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::Set(self.id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            estimated_time: ActiveValue::Set(self.estimated_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
///
/// Shorthand for `CourseFactory::new(db).build().await`.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
