/**
 * Password Reset Handler
 *
 * Implements `POST /reset-password`. Only a valid, unexpired reset token
 * is accepted; an access token is rejected like any other bad token. The
 * token must also match the account's current credential version, so it
 * stops working once the password has changed.
 */
use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{require, ResetPasswordRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::{TokenIssuer, TokenKind};
use crate::backend::auth::users::{get_user_by_email, update_password_hash};
use crate::backend::error::ApiError;
use crate::backend::middleware::JsonOrForm;
use crate::shared::MessageResponse;

pub const PASSWORD_UPDATED: &str = "Password updated.";
pub const INVALID_RESET_TOKEN: &str = "Invalid or expired reset token";

/// Reset password handler
///
/// # Errors
///
/// * `400 Bad Request` - a field is missing or the body is malformed
/// * `401 Unauthorized` - bad, expired, used or wrong-kind token, or unknown user
/// * `500 Internal Server Error` - hashing or database failure
pub async fn reset_password(
    State(pool): State<SqlitePool>,
    State(tokens): State<TokenIssuer>,
    State(passwords): State<PasswordHasher>,
    JsonOrForm(request): JsonOrForm<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let token = require(request.token, "token")?;
    let new_password = require(request.new_password, "new_password")?;

    let claims = tokens.verify(&token, TokenKind::PasswordReset).map_err(|e| {
        tracing::warn!("Rejected reset token: {:?}", e);
        ApiError::unauthorized(INVALID_RESET_TOKEN)
    })?;

    let user = get_user_by_email(&pool, &claims.sub).await?.ok_or_else(|| {
        tracing::warn!("Reset token for unknown user: {}", claims.sub);
        ApiError::unauthorized(INVALID_RESET_TOKEN)
    })?;

    if claims.ver != Some(user.credential_version()) {
        tracing::warn!("Stale reset token for {}", claims.sub);
        return Err(ApiError::unauthorized(INVALID_RESET_TOKEN));
    }

    let password_hash = passwords.hash(&new_password)?;

    if !update_password_hash(&pool, &claims.sub, &password_hash).await? {
        tracing::warn!("Reset token for unknown user: {}", claims.sub);
        return Err(ApiError::unauthorized(INVALID_RESET_TOKEN));
    }

    tracing::info!("Password updated for {}", claims.sub);

    Ok(Json(MessageResponse::new(PASSWORD_UPDATED)))
}
