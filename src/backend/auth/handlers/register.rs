/**
 * Registration Handler
 *
 * Implements `POST /register` (urlencoded form).
 *
 * # Process
 *
 * 1. Require all four fields
 * 2. Reject an email that is already registered (409)
 * 3. Hash the password with bcrypt
 * 4. Insert the user (a racing duplicate insert is also 409)
 */
use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{require, RegisterRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation, NewUser};
use crate::backend::error::ApiError;
use crate::backend::middleware::FormBody;
use crate::shared::MessageResponse;

pub const USER_CREATED: &str = "User created successfully.";
pub const EMAIL_EXISTS: &str = "That email already exists.";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - a field is missing
/// * `409 Conflict` - the email is already registered
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(pool): State<SqlitePool>,
    State(passwords): State<PasswordHasher>,
    FormBody(request): FormBody<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let email = require(request.email, "email")?;
    let first_name = require(request.first_name, "first_name")?;
    let last_name = require(request.last_name, "last_name")?;
    let password = require(request.password, "password")?;

    tracing::info!("Register request for: {}", email);

    if get_user_by_email(&pool, &email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(ApiError::conflict(EMAIL_EXISTS));
    }

    let new_user = NewUser {
        first_name,
        last_name,
        email,
        password_hash: passwords.hash(&password)?,
    };

    let user = create_user(&pool, &new_user).await.map_err(|e| {
        if is_unique_violation(&e) {
            tracing::warn!("Concurrent registration for: {}", new_user.email);
            ApiError::conflict(EMAIL_EXISTS)
        } else {
            ApiError::from(e)
        }
    })?;

    tracing::info!("User created: {} (id {})", user.email, user.id);

    Ok((StatusCode::CREATED, Json(MessageResponse::new(USER_CREATED))))
}
