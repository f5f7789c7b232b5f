//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::core::ServerState;
use crate::db::repository::menu;
use crate::utils::{AppError, AppJson, AppResult};
use shared::document::{document_to_json, documents_to_json};
use shared::models::{DeleteResult, InsertResult, MenuItemCreate, MenuItemUpdate, UpdateResult};

/// GET /menu - 获取全部菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Value>>> {
    let items = menu::find_all(state.store()).await?;
    Ok(Json(documents_to_json(items)))
}

/// GET /menu/:id - 获取单个菜品，不存在时返回 null
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Value>>> {
    let item = menu::find_by_id(state.store(), &id).await?;
    Ok(Json(item.map(document_to_json)))
}

/// POST /menu - 新增菜品 (管理员)
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<MenuItemCreate>,
) -> AppResult<Json<InsertResult>> {
    let result = menu::create(state.store(), payload).await?;
    tracing::info!(id = %result.inserted_id, "Menu item created");
    Ok(Json(result))
}

/// PATCH /menu/:id - 更新菜品的 name/recipe/category/price/image (管理员)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<MenuItemUpdate>,
) -> AppResult<Json<UpdateResult>> {
    if payload.is_empty() {
        return Err(AppError::validation("No updatable fields provided"));
    }

    let result = menu::update(state.store(), &id, payload).await?;
    Ok(Json(result))
}

/// DELETE /menu/:id - 删除菜品 (管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let result = menu::delete(state.store(), &id).await?;
    tracing::info!(id = %id, deleted = result.deleted_count, "Menu item deleted");
    Ok(Json(result))
}
