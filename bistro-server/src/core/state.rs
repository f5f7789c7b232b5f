use std::sync::Arc;
use std::time::Instant;

use crate::auth::JwtService;
use crate::core::{Config, Result};
use crate::db::{DbService, DocumentStore};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求克隆一次的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | 文档存储 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | started_at | Instant | 启动时间 (health 使用) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档存储
    pub db: DbService,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    started_at: Instant,
}

impl ServerState {
    /// 手动构造，通常使用 [`initialize()`](Self::initialize) 代替
    pub fn new(config: Config, db: DbService) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 连接数据库并 ping 一次；失败直接返回错误，进程不会带着坏连接启动。
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::connect(&config.database).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    /// 获取文档存储
    pub fn store(&self) -> &dyn DocumentStore {
        self.db.store()
    }

    /// 运行秒数
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
