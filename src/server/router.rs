use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::{CourseDto, UpdateCourseDto},
    },
    server::{controller::course, state::AppState},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Courses API", description = "Manage course records by numeric ID"),
    paths(
        course::get_courses,
        course::create_course,
        course::get_course,
        course::update_course,
        course::delete_course,
    ),
    components(schemas(CourseDto, UpdateCourseDto, ErrorDto, MessageDto)),
    tags((name = "course", description = "Course management endpoints"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/courses",
            get(course::get_courses).post(course::create_course),
        )
        .route(
            "/api/courses/{id}",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
