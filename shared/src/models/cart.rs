//! Cart Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Create cart entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemCreate {
    /// Menu item the entry refers to (not checked against `menu`)
    pub item_id: String,
    /// Owner; carts relate to users only through this string
    pub user_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// GET /carts query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartQuery {
    pub email: Option<String>,
}
