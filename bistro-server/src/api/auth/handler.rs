//! Token Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::validation::validate_required_text;
use crate::utils::{AppError, AppJson};
use shared::models::{TokenRequest, TokenResponse};

/// Sign a token for `{email, name}`
///
/// No credential check happens here; the identity provider in front of the
/// client has already authenticated the user.
pub async fn issue_token(
    State(state): State<ServerState>,
    AppJson(req): AppJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    validate_required_text(&req.email, "email")?;

    let token = state
        .get_jwt_service()
        .generate_token(&req.email, req.name.as_deref())
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::debug!(email = %req.email, "Issued access token");
    Ok(Json(TokenResponse { token }))
}
