//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - [`extract`] - 统一错误格式的 JSON 提取器
//! - [`logger`] - 日志初始化
//! - [`validation`] - 必填字段检查

pub mod error;
pub mod extract;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use extract::AppJson;
