use crate::server::{
    data::course::sql::SqlCourseStore,
    error::{course::CourseError, AppError},
    model::course::{Course, CreateCourseParams, ReplaceCourseParams},
    service::course::CourseService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn replace_params(id: i64, body_id: Option<i64>, title: &str) -> ReplaceCourseParams {
    ReplaceCourseParams {
        id,
        body_id,
        title: title.to_string(),
        description: "d2".to_string(),
        estimated_time: 20,
    }
}
