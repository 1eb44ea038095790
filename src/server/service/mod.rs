//! Business logic layer sitting between controllers and the data layer.

pub mod course;
