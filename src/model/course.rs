use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Course as exchanged over HTTP.
///
/// Also used as the request body for creating a course, where every field is required.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: i64,
}

/// Request body for replacing a course.
///
/// `id` may be omitted. When present it must equal the ID in the request path.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub estimated_time: i64,
}
