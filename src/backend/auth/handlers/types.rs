/**
 * Authentication Handler Types
 *
 * Request bodies for the authentication handlers. Every field is optional
 * at the decoding stage so that an absent field is reported by name as a
 * `MissingField` error rather than as a generic decode failure.
 */
use serde::{Deserialize, Serialize};

use crate::backend::error::ApiError;

/// Registration form
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Plaintext password (hashed before storage)
    pub password: Option<String>,
}

/// Login request (JSON or form)
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Password reset request (JSON or form)
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ResetPasswordRequest {
    /// Reset token mailed by `GET /retrieve-password/{email}`
    pub token: Option<String>,
    pub new_password: Option<String>,
}

/// Unwrap a decoded field or report it missing
pub fn require(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::missing_field(field))
}
