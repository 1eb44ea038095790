//! Relational course store backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{data::course::CourseStore, error::AppError, model::course::Course};

/// Course store persisting to the `course` table.
///
/// Holds a connection pool; clones share the pool.
#[derive(Clone)]
pub struct SqlCourseStore {
    db: DatabaseConnection,
}

impl SqlCourseStore {
    /// Creates a new SqlCourseStore instance.
    ///
    /// # Arguments
    /// - `db` - Connected database with the course table migrated
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseStore for SqlCourseStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let entity = entity::prelude::Course::find_by_id(id).one(&self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        let entities = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let count = entity::prelude::Course::find_by_id(id)
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn insert(&self, course: Course) -> Result<Course, AppError> {
        let entity = entity::course::ActiveModel {
            id: ActiveValue::Set(course.id),
            title: ActiveValue::Set(course.title),
            description: ActiveValue::Set(course.description),
            estimated_time: ActiveValue::Set(course.estimated_time),
        }
        .insert(&self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    async fn find_and_replace(
        &self,
        id: i64,
        replacement: Course,
    ) -> Result<Option<Course>, AppError> {
        let txn = self.db.begin().await?;

        // Row lock holds off concurrent replaces and deletes until commit; SQLite
        // serializes writers and omits the clause.
        let Some(prior) = entity::prelude::Course::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let updated = entity::course::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(replacement.title),
            description: ActiveValue::Set(replacement.description),
            estimated_time: ActiveValue::Set(replacement.estimated_time),
        }
        .update(&txn)
        .await;

        match updated {
            Ok(_) => {}
            Err(DbErr::RecordNotUpdated) => {
                txn.rollback().await?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        }

        txn.commit().await?;

        Ok(Some(Course::from_entity(prior)))
    }

    async fn find_and_delete(&self, id: i64) -> Result<Option<Course>, AppError> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Course::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let result = entity::prelude::Course::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;

        Ok(Some(Course::from_entity(existing)))
    }

    async fn shutdown(&self) -> Result<(), AppError> {
        self.db.clone().close().await?;
        Ok(())
    }
}
