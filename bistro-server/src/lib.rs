//! Bistro Boss Server - 餐厅点餐后端
//!
//! # 架构概述
//!
//! 请求 → 中间件 (令牌验证 → 管理员检查) → 处理函数 → 文档存储 → 响应
//!
//! - **数据库** (`db`): MongoDB 或进程内存储，统一为 [`db::DocumentStore`]
//! - **认证** (`auth`): JWT 令牌 + 基于 users 集合的管理员检查
//! - **HTTP API** (`api`): menu / reviews / carts / users
//!
//! # 模块结构
//!
//! ```text
//! bistro-server/src/
//! ├── core/          # 配置、状态、启动错误、服务器
//! ├── auth/          # JWT、中间件、提取器
//! ├── db/            # 存储抽象、后端、仓储
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 应用组装、请求日志
//! └── utils/         # 日志、校验、错误
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use services::build_app;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 加载 `.env` 并初始化日志
///
/// 必须在读取 [`Config`] 之前调用。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 不存在不是错误
    let _ = dotenvy::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_json = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok());
    let log_dir = std::env::var("LOG_DIR").ok();

    init_logger_with_file(log_level.as_deref(), log_json, log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  _      __
   / __ )(_)____/ /__________
  / __  / / ___/ __/ ___/ __ \
 / /_/ / (__  ) /_/ /  / /_/ /
/_____/_/____/\__/_/   \____/
    ____
   / __ )____  __________
  / __  / __ \/ ___/ ___/
 / /_/ / /_/ (__  |__  )
/_____/\____/____/____/
    "#
    );
}
