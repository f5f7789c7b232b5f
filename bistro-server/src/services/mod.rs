//! 服务层 - HTTP 应用组装和请求日志

pub mod app;
pub mod logging;

pub use app::{build_app, build_routes};
pub use logging::log_request;
