//! Errors raised while loading configuration and starting the server.

use thiserror::Error;

use crate::backend::mail::MailError;

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(name: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Server initialization errors
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database initialization failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("mail transport initialization failed: {0}")]
    Mail(#[from] MailError),

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
