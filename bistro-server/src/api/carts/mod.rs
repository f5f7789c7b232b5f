//! Cart API 模块
//!
//! 所有路由都要求登录

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .route("/carts", get(handler::list).post(handler::create))
        .route("/carts/{id}", delete(handler::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
