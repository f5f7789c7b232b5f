//! Menu API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/menu", get(handler::list))
        .route("/menu/{id}", get(handler::get_by_id));

    let write_routes = Router::new()
        .route("/menu", post(handler::create))
        .route("/menu/{id}", patch(handler::update).delete(handler::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    read_routes.merge(write_routes)
}
