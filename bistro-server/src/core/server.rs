//! Server Implementation
//!
//! HTTP 服务器启动和管理

use tokio::net::TcpListener;

use crate::core::{Config, Result, ServerState};
use crate::services::build_app;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// 使用已初始化的状态创建服务器 (见 [`ServerState::initialize`])
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let app = build_app(&self.state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("🍽️  Bistro Boss is sitting on port {}", self.config.http_port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// 等待 Ctrl+C
async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await;
}

/// 信号处理器注册失败时记录错误并保持运行，不触发关闭
async fn wait_for_signal<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_received_shuts_down() {
        let done = tokio::time::timeout(Duration::from_millis(100), wait_for_signal(async { Ok(()) }));
        assert!(done.await.is_ok());
    }

    #[tokio::test]
    async fn test_signal_handler_failure_keeps_running() {
        let failed = async { Err(std::io::Error::other("no signal driver")) };
        let done = tokio::time::timeout(Duration::from_millis(50), wait_for_signal(failed));
        assert!(done.await.is_err());
    }
}
