//! Course domain model and operation parameters.
//!
//! The domain `Course` is what the store layer reads and writes. Parameter types carry
//! request data from controllers into the service layer, which decides how it becomes
//! a stored course.

use crate::model::course::{CourseDto, UpdateCourseDto};

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Caller-supplied identifier addressing the course.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Estimated time to complete; the unit is not interpreted by the service.
    pub estimated_time: i64,
}

impl Course {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            estimated_time: entity.estimated_time,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            estimated_time: self.estimated_time,
        }
    }
}

/// Parameters for creating a new course.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: i64,
}

impl CreateCourseParams {
    /// Converts a request DTO to create parameters.
    pub fn from_dto(dto: CourseDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            estimated_time: dto.estimated_time,
        }
    }

    /// Builds the course that will be stored.
    pub fn into_course(self) -> Course {
        Course {
            id: self.id,
            title: self.title,
            description: self.description,
            estimated_time: self.estimated_time,
        }
    }
}

/// Parameters for replacing the full content of an existing course.
#[derive(Debug, Clone)]
pub struct ReplaceCourseParams {
    /// ID taken from the request path; this addresses the course and is always stored.
    pub id: i64,
    /// ID supplied in the request body, if any.
    pub body_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub estimated_time: i64,
}

impl ReplaceCourseParams {
    /// Converts a path ID and request DTO to replace parameters.
    pub fn from_dto(id: i64, dto: UpdateCourseDto) -> Self {
        Self {
            id,
            body_id: dto.id,
            title: dto.title,
            description: dto.description,
            estimated_time: dto.estimated_time,
        }
    }

    /// Builds the replacement document keyed by the path ID.
    pub fn into_course(self) -> Course {
        Course {
            id: self.id,
            title: self.title,
            description: self.description,
            estimated_time: self.estimated_time,
        }
    }
}
