//! 统一错误处理
//!
//! 错误类型定义在 `shared::error`，这里只做 re-export，
//! 让 handler 统一从 `crate::utils` 引用。
//!
//! ```ignore
//! Err(AppError::required_field("email"))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
