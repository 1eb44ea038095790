//! Course API Test Utils
//!
//! Provides shared testing utilities for the course service. This crate offers a builder
//! pattern for creating test contexts backed by in-memory SQLite databases, plus factories
//! for seeding course rows.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Course;
//!
//! #[tokio::test]
//! async fn test_course_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_table(Course).build().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
