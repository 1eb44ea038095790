use crate::server::{
    data::course::{sql::SqlCourseStore, CourseStore},
    error::AppError,
    model::course::Course,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, EntityTrait};
use test_utils::{builder::TestBuilder, factory};


fn course(id: i64, title: &str, description: &str, estimated_time: i64) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: description.to_string(),
        estimated_time,
    }
}

/// Store over a migrated in-memory database with a single pooled connection, so
/// concurrent transactions queue for the connection instead of interleaving.
async fn single_connection_store() -> SqlCourseStore {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    SqlCourseStore::new(db)
}
