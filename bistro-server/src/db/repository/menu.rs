//! Menu Repository

use bson::{Document, doc};
use shared::models::{DeleteResult, InsertResult, MenuItemCreate, MenuItemUpdate, UpdateResult};

use super::to_document_without;
use crate::db::store::{DbResult, DocumentStore, id_filter};

pub const COLLECTION: &str = "menu";

pub async fn find_all(db: &dyn DocumentStore) -> DbResult<Vec<Document>> {
    db.find(COLLECTION, doc! {}).await
}

pub async fn find_by_id(db: &dyn DocumentStore, id: &str) -> DbResult<Option<Document>> {
    db.find_one(COLLECTION, id_filter(id)).await
}

pub async fn create(db: &dyn DocumentStore, data: MenuItemCreate) -> DbResult<InsertResult> {
    let document = to_document_without(&data, &["_id"])?;
    db.insert_one(COLLECTION, document).await
}

/// `$set` of the provided fields only
pub async fn update(
    db: &dyn DocumentStore,
    id: &str,
    data: MenuItemUpdate,
) -> DbResult<UpdateResult> {
    let fields = bson::to_document(&data)?;
    db.update_one(COLLECTION, id_filter(id), doc! { "$set": fields })
        .await
}

pub async fn delete(db: &dyn DocumentStore, id: &str) -> DbResult<DeleteResult> {
    db.delete_one(COLLECTION, id_filter(id)).await
}
