//! Menu Item Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Create menu item payload
///
/// Unknown client fields are kept in `extra` and stored alongside.
/// Nothing is required; `price` keeps whatever JSON type the client sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Update menu item payload (PATCH); only provided fields are written
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.recipe.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.image.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_keeps_extra_fields() {
        let item: MenuItemCreate = serde_json::from_value(json!({
            "name": "Roast Duck",
            "price": 14.5,
            "spicy": true
        }))
        .unwrap();

        assert_eq!(item.name.as_deref(), Some("Roast Duck"));
        assert_eq!(item.price, Some(json!(14.5)));
        assert_eq!(item.extra.get("spicy"), Some(&json!(true)));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back, json!({ "name": "Roast Duck", "price": 14.5, "spicy": true }));
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let update: MenuItemUpdate =
            serde_json::from_value(json!({ "price": 9.0, "_id": "nope" })).unwrap();
        assert_eq!(update.price, Some(json!(9.0)));
        assert!(!update.is_empty());
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "price": 9.0 }));
    }

    #[test]
    fn test_create_accepts_string_price_without_name() {
        let item: MenuItemCreate = serde_json::from_value(json!({ "price": "5.50" })).unwrap();
        assert!(item.name.is_none());
        assert_eq!(item.price, Some(json!("5.50")));
    }

    #[test]
    fn test_empty_update() {
        let update: MenuItemUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(update.is_empty());
    }
}
