/**
 * Authentication Extractor
 *
 * Extracts and verifies the access token from the `Authorization` header
 * (format `Bearer <token>`). Handlers that take `AuthUser` are protected:
 * a missing header, a malformed header, or a token that is invalid, expired
 * or not an access token is rejected with 401 before the handler runs.
 */
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::sessions::{Claims, TokenIssuer, TokenKind};
use crate::backend::error::ApiError;

pub const MISSING_TOKEN: &str = "Missing access token";
pub const INVALID_TOKEN: &str = "Invalid access token";

/// Claims of a verified access token
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Email the token was issued for
    pub fn email(&self) -> &str {
        &self.0.sub
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    TokenIssuer: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            ApiError::unauthorized(MISSING_TOKEN)
        })?;

        let claims = TokenIssuer::from_ref(state)
            .verify(token, TokenKind::Access)
            .map_err(|e| {
                tracing::warn!("Invalid token: {:?}", e);
                ApiError::unauthorized(INVALID_TOKEN)
            })?;

        Ok(AuthUser(claims))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
