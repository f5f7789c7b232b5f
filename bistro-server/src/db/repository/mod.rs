//! Repository Module
//!
//! One module per collection. Each function performs exactly one store
//! operation (plus the serialization of its payload) and returns the raw
//! documents or write result.

pub mod cart;
pub mod menu;
pub mod review;
pub mod user;

use bson::Document;
use serde::Serialize;

use super::store::DbResult;

/// Serialize a create payload, dropping fields clients may not set
fn to_document_without<T: Serialize>(data: &T, reserved: &[&str]) -> DbResult<Document> {
    let mut document = bson::to_document(data)?;
    for field in reserved {
        document.remove(*field);
    }
    Ok(document)
}
