//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 根路径和健康检查
//! - [`auth`] - 令牌签发
//! - [`menu`] - 菜单
//! - [`reviews`] - 评价
//! - [`carts`] - 购物车
//! - [`users`] - 用户与角色

pub mod auth;
pub mod health;

pub mod carts;
pub mod menu;
pub mod reviews;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
