//! Cart Repository

use bson::{Document, doc};
use shared::models::{CartItemCreate, DeleteResult, InsertResult};

use super::to_document_without;
use crate::db::store::{DbResult, DocumentStore, id_filter};

pub const COLLECTION: &str = "carts";

/// Entries owned by `email`, matched on the `userEmail` string
pub async fn find_by_email(db: &dyn DocumentStore, email: &str) -> DbResult<Vec<Document>> {
    db.find(COLLECTION, doc! { "userEmail": email }).await
}

pub async fn create(db: &dyn DocumentStore, data: CartItemCreate) -> DbResult<InsertResult> {
    let document = to_document_without(&data, &["_id"])?;
    db.insert_one(COLLECTION, document).await
}

pub async fn delete(db: &dyn DocumentStore, id: &str) -> DbResult<DeleteResult> {
    db.delete_one(COLLECTION, id_filter(id)).await
}
