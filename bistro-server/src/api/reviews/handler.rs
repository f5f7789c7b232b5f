//! Review API Handlers

use axum::{Json, extract::State};
use serde_json::Value;

use crate::core::ServerState;
use crate::db::repository::review;
use crate::utils::AppResult;
use shared::document::documents_to_json;

/// GET /reviews - 获取全部评价
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Value>>> {
    let reviews = review::find_all(state.store()).await?;
    Ok(Json(documents_to_json(reviews)))
}
