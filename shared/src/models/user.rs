//! User Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role value granting administrative access; an absent role means an ordinary user
pub const ADMIN_ROLE: &str = "admin";

pub fn is_admin_role(role: Option<&str>) -> bool {
    role == Some(ADMIN_ROLE)
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// PATCH /users/{id} body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub new_role: String,
}

/// GET /users/{email} response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStatus {
    pub admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_admin_role() {
        assert!(is_admin_role(Some("admin")));
        assert!(!is_admin_role(Some("Admin")));
        assert!(!is_admin_role(Some("user")));
        assert!(!is_admin_role(None));
    }

    #[test]
    fn test_role_update_field_name() {
        let update: RoleUpdate = serde_json::from_value(json!({ "newRole": "admin" })).unwrap();
        assert_eq!(update.new_role, "admin");
    }
}
