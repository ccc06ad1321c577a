/**
 * Get Current User Handler
 *
 * Implements `GET /me`, which returns the profile of the user named by the
 * access token in the `Authorization` header. The password hash is never
 * part of the response.
 */
use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::shared::UserProfile;

pub const USER_NOT_FOUND: &str = "That user does not exist";

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing, malformed or invalid access token
/// * `404 Not Found` - the token's user no longer exists
///
/// # Example Response
///
/// ```json
/// {
///   "id": 1,
///   "first_name": "William",
///   "last_name": "Herschel",
///   "email": "test@test.com"
/// }
/// ```
pub async fn me(
    State(pool): State<SqlitePool>,
    auth: AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let user = get_user_by_email(&pool, auth.email()).await?.ok_or_else(|| {
        tracing::warn!("Token subject not found: {}", auth.email());
        ApiError::not_found(USER_NOT_FOUND)
    })?;

    Ok(Json(user.profile()))
}
