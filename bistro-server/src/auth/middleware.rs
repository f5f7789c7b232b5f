//! 认证中间件
//!
//! 为 JWT 认证和管理员授权提供 Axum 中间件。路由通过 `route_layer` 按需挂载：
//!
//! ```ignore
//! Router::new()
//!     .route("/menu", post(handler::create))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
//! ```
//!
//! 后添加的 layer 先执行，因此 `require_auth` 总在 `require_admin` 之前运行。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::{HeaderMap, Uri};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::db::repository::user as user_repo;
use crate::security_log;
use shared::models::is_admin_role;

/// 从请求头解析并验证令牌
pub(crate) fn authenticate(
    jwt_service: &JwtService,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<CurrentUser, AppError> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", uri));
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => Ok(CurrentUser::from(claims)),
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", uri)
            );

            match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

/// 认证中间件 - 要求有效令牌
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT，
/// 成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 NotAuthenticated |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS 预检
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let user = authenticate(state.get_jwt_service(), req.headers(), req.uri())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// 管理员中间件 - 要求 users 集合中 `role == "admin"`
///
/// 必须挂在 [`require_auth`] 之后。角色每次从数据库读取，撤销立即生效。
///
/// # 错误
///
/// - 未认证: 401
/// - 非管理员或用户不存在: 403 AdminRequired
/// - 数据库查询失败: 500
pub async fn require_admin(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let email = req
        .extensions()
        .get::<CurrentUser>()
        .map(|user| user.email.clone())
        .ok_or_else(AppError::unauthorized)?;

    let stored = user_repo::find_by_email(state.store(), &email).await?;
    let role = stored.as_ref().and_then(user_repo::role_of);
    if !is_admin_role(role) {
        security_log!(
            "WARN",
            "admin_required",
            email = email,
            user_role = role.unwrap_or("none").to_string()
        );
        return Err(AppError::admin_required());
    }

    Ok(next.run(req).await)
}
