//! In-process document store
//!
//! Collections are insertion-ordered `Vec<Document>`s inside a [`DashMap`],
//! so each operation holds a single shard lock and never awaits while
//! holding it. Used by the test suite and by `DB_BACKEND=memory`.

use std::path::Path;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use dashmap::DashMap;
use shared::document::bson_to_json;
use shared::models::{DeleteResult, InsertResult, UpdateResult};

use super::store::{DbError, DbResult, DocumentStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<Document>>,
    /// collection -> fields with a unique index
    unique_fields: DashMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON fixture: `{ "<collection>": [ {..}, .. ], .. }`
    ///
    /// Values go through extended-JSON parsing, so `{"$oid": ".."}` becomes a
    /// real ObjectId while plain string ids stay strings.
    pub fn from_seed_file(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DbError::Database(format!("Failed to read seed file {}: {e}", path.display()))
        })?;
        let seed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw)
            .map_err(|e| DbError::Serialization(format!("Invalid seed file: {e}")))?;

        let store = Self::new();
        for (collection, value) in seed {
            let serde_json::Value::Array(items) = value else {
                return Err(DbError::Serialization(format!(
                    "Seed collection '{collection}' must be an array"
                )));
            };
            let mut documents = Vec::with_capacity(items.len());
            for item in items {
                match Bson::try_from(item) {
                    Ok(Bson::Document(doc)) => documents.push(with_id(doc)),
                    Ok(_) => {
                        return Err(DbError::Serialization(format!(
                            "Seed collection '{collection}' must contain objects"
                        )));
                    }
                    Err(e) => return Err(DbError::Serialization(e.to_string())),
                }
            }
            tracing::info!(collection = %collection, count = documents.len(), "Seeded collection");
            store.collections.insert(collection, documents);
        }
        Ok(store)
    }

    /// Number of documents in a collection (0 when it does not exist)
    pub fn count(&self, collection: &str) -> usize {
        self.collections.get(collection).map(|c| c.len()).unwrap_or(0)
    }
}

/// Prepend a fresh ObjectId `_id` when the document has none
fn with_id(doc: Document) -> Document {
    if doc.contains_key("_id") {
        return doc;
    }
    let mut with_id = Document::new();
    with_id.insert("_id", ObjectId::new());
    with_id.extend(doc);
    with_id
}

fn matches(doc: &Document, filter: &Document) -> DbResult<bool> {
    for (key, expected) in filter {
        if key.starts_with('$') {
            return Err(DbError::Unsupported(format!("top-level operator {key}")));
        }
        let actual = doc.get(key);
        let ok = match expected {
            Bson::Document(condition) if condition.keys().any(|k| k.starts_with('$')) => {
                matches_condition(actual, condition)?
            }
            // `{field: null}` also matches documents lacking the field
            Bson::Null => matches!(actual, None | Some(Bson::Null)),
            value => actual == Some(value),
        };
        if !ok {
            return Ok(false);
        }
    }
    Ok(true)
}

fn matches_condition(actual: Option<&Bson>, condition: &Document) -> DbResult<bool> {
    for (op, operand) in condition {
        let ok = match op.as_str() {
            "$eq" => actual == Some(operand),
            "$in" => {
                let Bson::Array(candidates) = operand else {
                    return Err(DbError::Unsupported("$in requires an array".to_string()));
                };
                candidates.iter().any(|c| actual == Some(c))
            }
            other => return Err(DbError::Unsupported(format!("operator {other}"))),
        };
        if !ok {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Apply a `$set` update in place, returning whether anything changed
fn apply_update(doc: &mut Document, update: &Document) -> DbResult<bool> {
    let mut modified = false;
    for (op, fields) in update {
        let ("$set", Bson::Document(fields)) = (op.as_str(), fields) else {
            return Err(DbError::Unsupported(format!("update operator {op}")));
        };
        for (field, value) in fields {
            if field == "_id" {
                return Err(DbError::Unsupported("_id is immutable".to_string()));
            }
            if doc.get(field) != Some(value) {
                doc.insert(field.clone(), value.clone());
                modified = true;
            }
        }
    }
    Ok(modified)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> DbResult<Vec<Document>> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(Vec::new());
        };
        let mut found = Vec::new();
        for doc in docs.iter() {
            if matches(doc, &filter)? {
                found.push(doc.clone());
            }
        }
        Ok(found)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> DbResult<Option<Document>> {
        let Some(docs) = self.collections.get(collection) else {
            return Ok(None);
        };
        for doc in docs.iter() {
            if matches(doc, &filter)? {
                return Ok(Some(doc.clone()));
            }
        }
        Ok(None)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> DbResult<InsertResult> {
        let document = with_id(document);
        let id = document.get("_id").cloned().unwrap_or(Bson::Null);

        let mut docs = self.collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|d| d.get("_id") == Some(&id)) {
            return Err(DbError::DuplicateKey(format!(
                "{collection} _id {}",
                bson_to_json(id)
            )));
        }
        if let Some(fields) = self.unique_fields.get(collection) {
            for field in fields.iter() {
                if let Some(value) = document.get(field)
                    && docs.iter().any(|d| d.get(field) == Some(value))
                {
                    return Err(DbError::DuplicateKey(format!(
                        "{collection} {field} {}",
                        bson_to_json(value.clone())
                    )));
                }
            }
        }
        docs.push(document);

        Ok(InsertResult {
            acknowledged: true,
            inserted_id: bson_to_json(id),
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        update: Document,
    ) -> DbResult<UpdateResult> {
        let mut result = UpdateResult {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: None,
            upserted_count: 0,
        };
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(result);
        };
        for doc in docs.iter_mut() {
            if matches(doc, &filter)? {
                result.matched_count = 1;
                if apply_update(doc, &update)? {
                    result.modified_count = 1;
                }
                break;
            }
        }
        Ok(result)
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> DbResult<DeleteResult> {
        let mut result = DeleteResult {
            acknowledged: true,
            deleted_count: 0,
        };
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(result);
        };
        let mut position = None;
        for (index, doc) in docs.iter().enumerate() {
            if matches(doc, &filter)? {
                position = Some(index);
                break;
            }
        }
        if let Some(index) = position {
            docs.remove(index);
            result.deleted_count = 1;
        }
        Ok(result)
    }

    async fn ensure_unique_index(&self, collection: &str, field: &str) -> DbResult<()> {
        if let Some(docs) = self.collections.get(collection) {
            let mut seen: Vec<&Bson> = Vec::new();
            for value in docs.iter().filter_map(|d| d.get(field)) {
                if seen.contains(&value) {
                    return Err(DbError::DuplicateKey(format!(
                        "{collection} {field} {}",
                        bson_to_json(value.clone())
                    )));
                }
                seen.push(value);
            }
        }

        let mut fields = self.unique_fields.entry(collection.to_string()).or_default();
        if !fields.iter().any(|f| f == field) {
            fields.push(field.to_string());
        }
        Ok(())
    }

    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
