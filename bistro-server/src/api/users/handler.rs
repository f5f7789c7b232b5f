//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::security_log;
use crate::utils::validation::validate_required_text;
use crate::utils::{AppError, AppJson, AppResult};
use shared::document::documents_to_json;
use shared::models::{
    AdminStatus, DeleteResult, InsertResult, RoleUpdate, UpdateResult, UserCreate, is_admin_role,
};

/// GET /users - 全部用户 (管理员)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Value>>> {
    let users = user::find_all(state.store()).await?;
    Ok(Json(documents_to_json(users)))
}

/// GET /users/:email - 查询本人是否管理员
///
/// 只能查询令牌中的邮箱，否则 403。用户不存在时 `admin` 为 false。
pub async fn admin_status(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<AdminStatus>> {
    if email != current_user.email {
        security_log!(
            "WARN",
            "identity_mismatch",
            token_email = current_user.email.clone(),
            requested_email = email.clone()
        );
        return Err(AppError::identity_mismatch());
    }

    let stored = user::find_by_email(state.store(), &email).await?;
    let admin = is_admin_role(stored.as_ref().and_then(user::role_of));
    Ok(Json(AdminStatus { admin }))
}

/// POST /users - 注册用户，邮箱已存在时 409
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<UserCreate>,
) -> AppResult<(StatusCode, Json<InsertResult>)> {
    validate_required_text(&payload.email, "email")?;

    if user::find_by_email(state.store(), &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::already_exists(format!("User {}", payload.email)));
    }

    let result = user::create(state.store(), payload).await?;
    tracing::info!(id = %result.inserted_id, "User created");
    Ok((StatusCode::CREATED, Json(result)))
}

/// DELETE /users/:id (管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let result = user::delete(state.store(), &id).await?;
    tracing::info!(id = %id, deleted = result.deleted_count, "User deleted");
    Ok(Json(result))
}

/// PATCH /users/:id - 只修改 role 字段 (管理员)
pub async fn update_role(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
    AppJson(payload): AppJson<RoleUpdate>,
) -> AppResult<Json<UpdateResult>> {
    validate_required_text(&payload.new_role, "newRole")?;

    let result = user::update_role(state.store(), &id, &payload.new_role).await?;
    security_log!(
        "INFO",
        "role_changed",
        operator = current_user.email.clone(),
        target_id = id.clone(),
        new_role = payload.new_role.clone()
    );
    Ok(Json(result))
}
