//! User API 模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /users | POST | 注册用户 | 无 |
//! | /users | GET | 用户列表 | 管理员 |
//! | /users/{email} | GET | 是否管理员 (仅限本人) | 登录 |
//! | /users/{id} | PATCH | 修改角色 | 管理员 |
//! | /users/{id} | DELETE | 删除用户 | 管理员 |
//!
//! `/users/{key}` 上 GET 的参数是邮箱，PATCH/DELETE 的参数是文档 id；
//! 同一路径段只能有一个参数名，所以统一叫 `key`。

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let public_routes = Router::new().route("/users", post(handler::create));

    let self_routes = Router::new()
        .route("/users/{key}", get(handler::admin_status))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let admin_routes = Router::new()
        .route("/users", get(handler::list))
        .route("/users/{key}", patch(handler::update_role).delete(handler::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes.merge(self_routes).merge(admin_routes)
}
