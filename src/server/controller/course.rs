use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::{CourseDto, UpdateCourseDto},
    },
    server::{
        error::{course::CourseError, AppError},
        model::course::{CreateCourseParams, ReplaceCourseParams},
        service::course::CourseService,
        state::AppState,
        util::parse::parse_course_id,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

const RETRIEVE_FAILED: &str = "Failed to retrieve course.";
const RETRIEVE_ALL_FAILED: &str = "Failed to retrieve courses.";
const CREATE_FAILED: &str = "Failed to create course.";
const UPDATE_FAILED: &str = "Failed to update course.";
const DELETE_FAILED: &str = "Failed to delete course.";

/// Get all courses.
///
/// # Returns
/// - `200 OK` - All courses ordered by ID
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(state.store.as_ref());

    let courses = service
        .get_all()
        .await
        .map_err(|e| e.context(RETRIEVE_ALL_FAILED))?;

    Ok((
        StatusCode::OK,
        Json(
            courses
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new course.
///
/// The body must carry every course field, including the ID.
///
/// # Returns
/// - `201 Created` - Successfully created course
/// - `400 Bad Request` - Malformed body
/// - `409 Conflict` - A course with that ID already exists
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 409, description = "Course ID already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| CourseError::InvalidBody(e.body_text()))?;

    let service = CourseService::new(state.store.as_ref());

    let course = service
        .create(CreateCourseParams::from_dto(payload))
        .await
        .map_err(|e| e.context(CREATE_FAILED))?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// Get a course by ID.
///
/// # Returns
/// - `200 OK` - Course details
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No course with that ID
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 400, description = "Invalid course ID", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let course_id = parse_course_id(&id)?;

    let service = CourseService::new(state.store.as_ref());

    let course = service
        .get_by_id(course_id)
        .await
        .map_err(|e| e.context(RETRIEVE_FAILED))?;

    match course {
        Some(course) => Ok((StatusCode::OK, Json(course.into_dto()))),
        None => Err(CourseError::NotFound(course_id).into()),
    }
}

/// Replace a course.
///
/// Overwrites every field of the course. The body ID may be omitted; if present it must
/// equal the path ID. Responds with the course as it was before the replacement.
///
/// # Returns
/// - `200 OK` - Course before the replacement
/// - `400 Bad Request` - ID is not an integer, malformed body, or body ID mismatch
/// - `404 Not Found` - No course with that ID
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully replaced course, prior state returned", body = CourseDto),
        (status = 400, description = "Invalid course ID or course data", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // The ID is validated before the body so a bad ID always reports as such.
    let course_id = parse_course_id(&id)?;
    let Json(payload) = payload.map_err(|e| CourseError::InvalidBody(e.body_text()))?;

    let service = CourseService::new(state.store.as_ref());

    let params = ReplaceCourseParams::from_dto(course_id, payload);

    let prior = service
        .replace(params)
        .await
        .map_err(|e| e.context(UPDATE_FAILED))?;

    match prior {
        Some(course) => Ok((StatusCode::OK, Json(course.into_dto()))),
        None => Err(CourseError::NotFound(course_id).into()),
    }
}

/// Delete a course.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No course with that ID
/// - `500 Internal Server Error` - Store error
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i64, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = MessageDto),
        (status = 400, description = "Invalid course ID", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let course_id = parse_course_id(&id)?;

    let service = CourseService::new(state.store.as_ref());

    let deleted = service
        .delete(course_id)
        .await
        .map_err(|e| e.context(DELETE_FAILED))?;

    match deleted {
        Some(_) => Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: format!("Course with ID {} deleted.", course_id),
            }),
        )),
        None => Err(CourseError::NotFound(course_id).into()),
    }
}
