//! Cart API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::Value;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::cart;
use crate::utils::validation::validate_required_text;
use crate::utils::{AppJson, AppResult};
use shared::document::documents_to_json;
use shared::models::{CartItemCreate, CartQuery, DeleteResult, InsertResult};

/// GET /carts?email= - 某个用户的购物车，未指定 email 时取令牌中的邮箱
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Query(query): Query<CartQuery>,
) -> AppResult<Json<Vec<Value>>> {
    let email = query
        .email
        .filter(|e| !e.trim().is_empty())
        .unwrap_or(current_user.email);

    let items = cart::find_by_email(state.store(), &email).await?;
    Ok(Json(documents_to_json(items)))
}

/// POST /carts - 加入购物车
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CartItemCreate>,
) -> AppResult<Json<InsertResult>> {
    validate_required_text(&payload.item_id, "itemId")?;
    validate_required_text(&payload.user_email, "userEmail")?;

    let result = cart::create(state.store(), payload).await?;
    Ok(Json(result))
}

/// DELETE /carts/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let result = cart::delete(state.store(), &id).await?;
    Ok(Json(result))
}
