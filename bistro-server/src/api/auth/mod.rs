//! Token Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// POST /jwt: public, issues a bearer token for the given identity
pub fn router() -> Router<ServerState> {
    Router::new().route("/jwt", post(handler::issue_token))
}
