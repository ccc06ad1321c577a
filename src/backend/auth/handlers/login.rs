/**
 * Login Handler
 *
 * This module implements the user authentication handler for `POST /login`.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate an access token whose subject is the email
 *
 * An unknown email and a wrong password produce the same 401 response.
 */
use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{require, LoginRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::middleware::JsonOrForm;
use crate::shared::TokenResponse;

pub const LOGIN_SUCCEEDED: &str = "Login succeeded!";
pub const BAD_CREDENTIALS: &str = "Bad email or password";

/// Login handler
///
/// Accepts a JSON body when `Content-Type` is `application/json`, and a
/// form body otherwise.
///
/// # Errors
///
/// * `400 Bad Request` - a field is missing or the body is malformed
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - database, bcrypt or signing failure
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "test@test.com", "password": "P@ssw0rd"}
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login succeeded!",
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    State(passwords): State<PasswordHasher>,
    State(tokens): State<TokenIssuer>,
    JsonOrForm(request): JsonOrForm<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let email = require(request.email, "email")?;
    let password = require(request.password, "password")?;

    tracing::info!("Login request for: {}", email);

    let user = get_user_by_email(&pool, &email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        ApiError::unauthorized(BAD_CREDENTIALS)
    })?;

    if !passwords.verify(&password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(ApiError::unauthorized(BAD_CREDENTIALS));
    }

    let access_token = tokens.issue_access_token(&user.email)?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(TokenResponse {
        message: LOGIN_SUCCEEDED.to_string(),
        access_token,
    }))
}
