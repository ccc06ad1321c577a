/**
 * Message Bodies
 *
 * This module defines the small JSON bodies most endpoints answer with:
 * a bare `{"message": ...}` object, and the login response that also
 * carries the access token.
 */
use serde::{Deserialize, Serialize};

/// A JSON body holding a single human-readable message
///
/// # Example
/// ```rust
/// use planetary_api::shared::MessageResponse;
///
/// let body = MessageResponse::new("User created successfully.");
/// assert_eq!(body.message, "User created successfully.");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// The message text
    pub message: String,
}

impl MessageResponse {
    /// Create a new message body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    /// Confirmation message
    pub message: String,
    /// Signed identity token (JWT) whose subject is the user's email
    pub access_token: String,
}
