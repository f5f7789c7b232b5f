//! 请求体提取器
//!
//! `axum::Json` 的拒绝响应是纯文本；这里把它换成统一的 [`AppError`] 格式。

use axum::extract::FromRequest;

use crate::utils::AppError;

/// JSON 请求体，解析失败返回 400 ValidationFailed
///
/// ```ignore
/// pub async fn create(AppJson(payload): AppJson<MenuItemCreate>) -> AppResult<..>
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
