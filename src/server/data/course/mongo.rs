//! Document course store backed by MongoDB.
//!
//! Courses live as plain documents `{ id, title, description, estimatedTime }` in a single
//! collection. A unique index on `id` is created on connect.
//!
//! Documents written by other clients may hold numbers as 32-bit ints or doubles; those are
//! read as long as they carry an integral value. Documents that still cannot be decoded are
//! skipped when listing, so one bad record does not hide the rest of the collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, Bson, Document},
    options::IndexOptions,
    Client, Collection, IndexModel,
};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use crate::server::{data::course::CourseStore, error::AppError, model::course::Course};

/// Stored shape of a course document. The driver-assigned `_id` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDocument {
    #[serde(deserialize_with = "integral_number")]
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "integral_number")]
    pub estimated_time: i64,
}

/// Reads an `Int32`, `Int64` or integral `Double` as an `i64`.
fn integral_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Bson::deserialize(deserializer)? {
        Bson::Int32(value) => Ok(value.into()),
        Bson::Int64(value) => Ok(value),
        Bson::Double(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        other => Err(D::Error::custom(format!(
            "expected an integral number, found {other}"
        ))),
    }
}

/// Decodes raw course documents, dropping any that do not have the course shape.
fn decode_courses(documents: Vec<Document>) -> Vec<Course> {
    documents
        .into_iter()
        .filter_map(|document| match bson::from_document::<CourseDocument>(document) {
            Ok(course) => Some(course.into()),
            Err(e) => {
                tracing::warn!("Skipping malformed course document: {}", e);
                None
            }
        })
        .collect()
}

impl From<Course> for CourseDocument {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            estimated_time: course.estimated_time,
        }
    }
}

impl From<CourseDocument> for Course {
    fn from(document: CourseDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            description: document.description,
            estimated_time: document.estimated_time,
        }
    }
}

fn by_id(id: i64) -> Document {
    doc! { "id": id }
}

/// Course store persisting to a MongoDB collection.
#[derive(Clone)]
pub struct MongoCourseStore {
    client: Client,
    collection: Collection<CourseDocument>,
}

impl MongoCourseStore {
    /// Connects to the deployment at `uri` and prepares the course collection.
    ///
    /// # Arguments
    /// - `uri` - MongoDB connection string
    /// - `database` - Database holding the collection
    /// - `collection` - Collection holding course documents
    ///
    /// # Returns
    /// - `Ok(MongoCourseStore)` - Connected store with the `id` index in place
    /// - `Err(AppError::MongoErr)` - Failed to connect or create the index
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri).await?;
        let collection = client
            .database(database)
            .collection::<CourseDocument>(collection);

        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        collection.create_index(index).await?;

        Ok(Self { client, collection })
    }
}

#[async_trait]
impl CourseStore for MongoCourseStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let document = self.collection.find_one(by_id(id)).await?;

        Ok(document.map(Course::from))
    }

    async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        let documents: Vec<Document> = self
            .collection
            .clone_with_type::<Document>()
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(decode_courses(documents))
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let count = self.collection.count_documents(by_id(id)).limit(1).await?;

        Ok(count > 0)
    }

    async fn insert(&self, course: Course) -> Result<Course, AppError> {
        let document = CourseDocument::from(course);
        self.collection.insert_one(&document).await?;

        Ok(document.into())
    }

    async fn find_and_replace(
        &self,
        id: i64,
        replacement: Course,
    ) -> Result<Option<Course>, AppError> {
        let replacement = CourseDocument {
            id,
            ..CourseDocument::from(replacement)
        };

        // Returns the document as it was before the replacement by default.
        let prior = self
            .collection
            .find_one_and_replace(by_id(id), &replacement)
            .await?;

        Ok(prior.map(Course::from))
    }

    async fn find_and_delete(&self, id: i64) -> Result<Option<Course>, AppError> {
        let deleted = self.collection.find_one_and_delete(by_id(id)).await?;

        Ok(deleted.map(Course::from))
    }

    async fn shutdown(&self) -> Result<(), AppError> {
        self.client.clone().shutdown().await;
        Ok(())
    }
}
