/**
 * Password Recovery Handler
 *
 * Implements `GET /retrieve-password/{email}`. The stored password is never
 * sent anywhere: the user receives a short-lived reset token to present to
 * `POST /reset-password`.
 */
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::sessions::{TokenIssuer, RESET_TOKEN_TTL};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::mail::{Mailer, OutgoingMail};
use crate::shared::MessageResponse;

pub const EMAIL_NOT_FOUND: &str = "That email doesn't exist";
pub const RESET_SUBJECT: &str = "Your Planetary API password reset";

/// Retrieve password handler
///
/// # Errors
///
/// * `401 Unauthorized` - no user has that email
/// * `500 Internal Server Error` - signing, database or mail failure
pub async fn retrieve_password(
    State(pool): State<SqlitePool>,
    State(tokens): State<TokenIssuer>,
    State(mailer): State<Arc<dyn Mailer>>,
    Path(email): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = get_user_by_email(&pool, &email).await?.ok_or_else(|| {
        tracing::warn!("Password recovery for unknown email: {}", email);
        ApiError::unauthorized(EMAIL_NOT_FOUND)
    })?;

    let token = tokens.issue_reset_token(&user.email, user.credential_version())?;

    mailer
        .send(OutgoingMail {
            to: user.email.clone(),
            subject: RESET_SUBJECT.to_string(),
            body: reset_mail_body(&user.first_name, &token),
        })
        .await?;

    tracing::info!("Password reset token sent to {}", user.email);

    Ok(Json(MessageResponse::new(format!(
        "Password reset instructions sent to {}",
        user.email
    ))))
}

fn reset_mail_body(first_name: &str, token: &str) -> String {
    format!(
        "Hello {first_name},\n\n\
         Someone asked to reset your Planetary API password. To choose a new one,\n\
         POST this token with your new password to /reset-password within {} minutes:\n\n\
         {token}\n\n\
         If you did not ask for this, ignore this message.\n",
        RESET_TOKEN_TTL.as_secs() / 60
    )
}
