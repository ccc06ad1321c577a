/**
 * Handler Error Types
 *
 * This module defines the error returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * - `MissingField` / `InvalidField` - a form or JSON body is incomplete or malformed (400)
 * - `Parameter` - the `/parameters` query string could not be read (500)
 *
 * ## Outcome Errors
 *
 * - `Unauthorized` - credentials or token rejected (401)
 * - `Conflict` - a unique record already exists (409)
 * - `NotFound` - the addressed record does not exist (404)
 *
 * ## Faults
 *
 * - `Database`, `Hashing`, `Token`, `Mail` - collaborator failures (500)
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::mail::MailError;

/// Message returned to clients for any internal fault
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors produced by HTTP handlers
///
/// # Usage
///
/// ```rust
/// use planetary_api::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::conflict("That email already exists.");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
/// assert_eq!(err.message(), "That email already exists.");
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required form or JSON field was absent
    #[error("missing field '{0}'")]
    MissingField(String),

    /// A form or JSON body could not be decoded
    #[error("invalid field '{field}': {reason}")]
    InvalidField {
        /// The offending field, or `body` when unknown
        field: String,
        /// Why decoding failed
        reason: String,
    },

    /// The `/parameters` query string could not be read
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Credentials or token were rejected
    #[error("{0}")]
    Unauthorized(String),

    /// A record with the same unique key already exists
    #[error("{0}")]
    Conflict(String),

    /// The addressed record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Storage fault
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification fault
    #[error("password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing fault
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Outbound mail fault
    #[error("mail error: {0}")]
    Mail(#[from] MailError),
}

/// Errors reading the age-gate query string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// The parameter was not present
    #[error("missing query parameter '{0}'")]
    Missing(&'static str),

    /// The parameter was present but not an integer
    #[error("query parameter '{name}' must be an integer, got '{value}'")]
    Invalid {
        /// Parameter name
        name: &'static str,
        /// The raw value received
        value: String,
    },
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `MissingField`, `InvalidField` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Parameter` and all faults - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::InvalidField { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Parameter(_)
            | Self::Database(_)
            | Self::Hashing(_)
            | Self::Token(_)
            | Self::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is a collaborator fault rather than a client outcome
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Hashing(_) | Self::Token(_) | Self::Mail(_)
        )
    }

    /// Get the message shown to the client
    ///
    /// Faults never expose their details.
    pub fn message(&self) -> String {
        if self.is_fault() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
