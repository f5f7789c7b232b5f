//! Write results
//!
//! Same field names the MongoDB drivers report, so clients written against
//! the raw driver output keep working.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<Value>,
    pub upserted_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_result_shape() {
        let result = UpdateResult {
            acknowledged: true,
            matched_count: 1,
            modified_count: 0,
            upserted_id: None,
            upserted_count: 0,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 0,
                "upsertedId": null,
                "upsertedCount": 0
            })
        );
    }

    #[test]
    fn test_delete_result_shape() {
        let result = DeleteResult { acknowledged: true, deleted_count: 1 };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "acknowledged": true, "deletedCount": 1 })
        );
    }
}
