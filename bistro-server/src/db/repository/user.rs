//! User Repository

use bson::{Document, doc};
use shared::models::{DeleteResult, InsertResult, UpdateResult, UserCreate};

use super::to_document_without;
use crate::db::store::{DbResult, DocumentStore, id_filter};

pub const COLLECTION: &str = "users";

pub async fn find_all(db: &dyn DocumentStore) -> DbResult<Vec<Document>> {
    db.find(COLLECTION, doc! {}).await
}

pub async fn find_by_email(db: &dyn DocumentStore, email: &str) -> DbResult<Option<Document>> {
    db.find_one(COLLECTION, doc! { "email": email }).await
}

/// Insert a new user; `role` is never taken from the client
pub async fn create(db: &dyn DocumentStore, data: UserCreate) -> DbResult<InsertResult> {
    let document = to_document_without(&data, &["_id", "role"])?;
    db.insert_one(COLLECTION, document).await
}

pub async fn delete(db: &dyn DocumentStore, id: &str) -> DbResult<DeleteResult> {
    db.delete_one(COLLECTION, id_filter(id)).await
}

/// `$set: { role }` and nothing else
pub async fn update_role(db: &dyn DocumentStore, id: &str, role: &str) -> DbResult<UpdateResult> {
    db.update_one(COLLECTION, id_filter(id), doc! { "$set": { "role": role } })
        .await
}

/// Stored role of a user document, `None` for ordinary users
pub fn role_of(user: &Document) -> Option<&str> {
    user.get_str("role").ok()
}
