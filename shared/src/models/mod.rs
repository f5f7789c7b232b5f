//! Data models
//!
//! Request DTOs for the four collections plus the write-result shapes the
//! handlers return. Stored documents themselves stay loosely typed.

pub mod auth;
pub mod cart;
pub mod menu;
pub mod user;
pub mod write_result;

pub use auth::{TokenRequest, TokenResponse};
pub use cart::{CartItemCreate, CartQuery};
pub use menu::{MenuItemCreate, MenuItemUpdate};
pub use user::{ADMIN_ROLE, AdminStatus, RoleUpdate, UserCreate, is_admin_role};
pub use write_result::{DeleteResult, InsertResult, UpdateResult};
