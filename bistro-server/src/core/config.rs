use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// 默认数据库名
pub const DEFAULT_DB_NAME: &str = "bistroBossDB";

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbBackend {
    /// MongoDB (生产)
    Mongo,
    /// 进程内存储 (测试/本地开发)
    Memory,
}

impl std::str::FromStr for DbBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(ServerError::Config(format!(
                "Unknown DB_BACKEND '{other}', expected 'mongo' or 'memory'"
            ))),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub backend: DbBackend,
    /// MongoDB 连接串 (可能包含凭据，不要打印)
    pub uri: String,
    pub name: String,
    /// 内存后端的 JSON 种子文件
    pub seed_file: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let backend = match env("DB_BACKEND") {
            Some(value) => value.parse()?,
            None => DbBackend::Mongo,
        };

        Ok(Self {
            backend,
            uri: mongo_uri_from_env(),
            name: env("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into()),
            seed_file: env("DB_SEED_FILE"),
        })
    }

    /// 内存后端，供测试使用
    pub fn memory() -> Self {
        Self {
            backend: DbBackend::Memory,
            uri: String::new(),
            name: DEFAULT_DB_NAME.into(),
            seed_file: None,
        }
    }
}

/// `MONGODB_URI` 优先；否则由 `DB_USER`/`DB_PASS` 拼接 SRV 连接串；都没有则连本地
fn mongo_uri_from_env() -> String {
    if let Some(uri) = env("MONGODB_URI") {
        return uri;
    }
    match (env("DB_USER"), env("DB_PASS")) {
        (Some(user), Some(pass)) => build_atlas_uri(
            &user,
            &pass,
            &env("DB_CLUSTER").unwrap_or_else(|| "cluster0.mongodb.net".into()),
            &env("DB_APP_NAME").unwrap_or_else(|| "Cluster0".into()),
        ),
        _ => "mongodb://localhost:27017".into(),
    }
}

/// 凭据需要百分号编码，否则 `@`、`:` 会破坏 URI
pub fn build_atlas_uri(user: &str, pass: &str, cluster: &str, app_name: &str) -> String {
    format!(
        "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName={}",
        utf8_percent_encode(user, NON_ALPHANUMERIC),
        utf8_percent_encode(pass, NON_ALPHANUMERIC),
        cluster,
        utf8_percent_encode(app_name, NON_ALPHANUMERIC),
    )
}

/// 空字符串视为未设置
fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 5000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | DB_BACKEND | mongo | mongo / memory |
/// | MONGODB_URI | - | 完整连接串 |
/// | DB_USER / DB_PASS | - | Atlas 凭据 |
/// | DB_CLUSTER | cluster0.mongodb.net | Atlas 主机 |
/// | DB_APP_NAME | Cluster0 | appName 参数 |
/// | DB_NAME | bistroBossDB | 数据库名 |
/// | DB_SEED_FILE | - | 内存后端种子文件 |
/// | ACCESS_TOKEN_SECRET | - | 令牌密钥 (生产必填) |
/// | JWT_EXPIRATION_MINUTES | 1440 | 令牌有效期 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志 |
/// | LOG_DIR | - | 日志文件目录 |
///
/// # 示例
///
/// ```ignore
/// DB_BACKEND=memory PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 运行环境: development | production
    pub environment: String,
    pub database: DatabaseConfig,
    /// JWT 认证配置
    pub jwt: JwtConfig,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        let environment = env("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let production = environment == "production";

        Ok(Self {
            http_port: env("PORT").and_then(|p| p.parse().ok()).unwrap_or(5000),
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env(production)
                .map_err(|e| ServerError::Config(e.to_string()))?,
            environment,
        })
    }

    /// 测试配置: 内存后端 + 固定密钥
    pub fn for_tests(secret: impl Into<String>) -> Self {
        Self {
            http_port: 0,
            environment: "test".into(),
            database: DatabaseConfig::memory(),
            jwt: JwtConfig::with_secret(secret),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
