//! Review Repository (read-only; reviews are imported, not written through the API)

use bson::{Document, doc};

use crate::db::store::{DbResult, DocumentStore};

pub const COLLECTION: &str = "reviews";

pub async fn find_all(db: &dyn DocumentStore) -> DbResult<Vec<Document>> {
    db.find(COLLECTION, doc! {}).await
}
