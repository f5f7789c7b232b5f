//! Document store interface
//!
//! Every handler reaches the database through [`DocumentStore`]. Filters are
//! plain BSON documents limited to top-level equality and `$in`; updates are
//! limited to `$set`. [`MongoStore`](super::MongoStore) passes them straight
//! to the driver, [`MemoryStore`](super::MemoryStore) evaluates them itself.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document, doc};
use shared::models::{DeleteResult, InsertResult, UpdateResult};
use thiserror::Error;

use crate::utils::AppError;

/// Store error types
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Unsupported query: {0}")]
    Unsupported(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// MongoDB server code for unique index violations
const DUPLICATE_KEY_CODE: i32 = 11000;

impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                DbError::DuplicateKey(write_error.message.clone())
            }
            _ => DbError::Database(err.to_string()),
        }
    }
}

impl From<bson::ser::Error> for DbError {
    fn from(err: bson::ser::Error) -> Self {
        DbError::Serialization(err.to_string())
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateKey(msg) => AppError::already_exists(msg),
            other => AppError::database(other.to_string()),
        }
    }
}

/// Result type for store operations
pub type DbResult<T> = Result<T, DbError>;

#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// All documents matching `filter`, in storage order
    async fn find(&self, collection: &str, filter: Document) -> DbResult<Vec<Document>>;

    async fn find_one(&self, collection: &str, filter: Document) -> DbResult<Option<Document>>;

    /// Insert one document; an `_id` is generated when absent
    async fn insert_one(&self, collection: &str, document: Document) -> DbResult<InsertResult>;

    /// Apply `update` to the first document matching `filter`
    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> DbResult<UpdateResult>;

    async fn delete_one(&self, collection: &str, filter: Document) -> DbResult<DeleteResult>;

    /// Create a unique index on `field`; idempotent
    ///
    /// Later inserts carrying an existing value fail with
    /// [`DbError::DuplicateKey`].
    async fn ensure_unique_index(&self, collection: &str, field: &str) -> DbResult<()>;

    /// Round-trip check used at boot and by `/health`
    async fn ping(&self) -> DbResult<()>;

    fn backend_name(&self) -> &'static str;
}

/// Filter matching a path identifier
///
/// Ids generated by the store are ObjectIds while imported fixtures may use
/// plain strings, so a 24-hex id matches either representation.
pub fn id_filter(id: &str) -> Document {
    match ObjectId::parse_str(id) {
        Ok(oid) => doc! { "_id": { "$in": [Bson::ObjectId(oid), Bson::String(id.to_string())] } },
        Err(_) => doc! { "_id": id },
    }
}
