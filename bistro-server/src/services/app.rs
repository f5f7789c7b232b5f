//! HTTP 应用组装

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::services::logging::log_request;

/// 合并各资源路由；鉴权由各路由自己的 `route_layer` 负责
pub fn build_routes(state: &ServerState) -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::auth::router())
        .merge(crate::api::menu::router(state))
        .merge(crate::api::reviews::router())
        .merge(crate::api::carts::router(state))
        .merge(crate::api::users::router(state))
}

/// 完整的应用: 路由 + 状态 + CORS + 请求日志
pub fn build_app(state: &ServerState) -> Router {
    build_routes(state)
        .with_state(state.clone())
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
