//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields
//! they care about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let course = factory::course::create_course(&db).await?;
//!
//! // Customize through the builder
//! let course = factory::course::CourseFactory::new(&db)
//!     .id(1)
//!     .title("A")
//!     .build()
//!     .await?;
//! ```

pub mod course;
pub mod helpers;
