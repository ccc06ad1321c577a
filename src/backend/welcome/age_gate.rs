//! Age gate shared by the welcome endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::shared::MessageResponse;

pub const MINIMUM_AGE: i32 = 18;

/// Outcome of an age check, carrying the visitor's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeVerdict {
    /// Old enough (200)
    Welcome(String),
    /// Younger than `MINIMUM_AGE` (401)
    TooYoung(String),
}

/// Decide whether `name`, aged `age`, may enter
///
/// # Example
/// ```rust
/// use planetary_api::backend::welcome::{check_age, AgeVerdict};
///
/// assert_eq!(check_age("Ada", 36), AgeVerdict::Welcome("Ada".to_string()));
/// assert_eq!(check_age("Tim", 17), AgeVerdict::TooYoung("Tim".to_string()));
/// ```
pub fn check_age(name: &str, age: i32) -> AgeVerdict {
    if age < MINIMUM_AGE {
        AgeVerdict::TooYoung(name.to_string())
    } else {
        AgeVerdict::Welcome(name.to_string())
    }
}

impl AgeVerdict {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Welcome(_) => StatusCode::OK,
            Self::TooYoung(_) => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Welcome(name) => format!("Welcome {name}, you are old enough!"),
            Self::TooYoung(name) => format!("Sorry {name}, you are not old enough."),
        }
    }
}

impl IntoResponse for AgeVerdict {
    fn into_response(self) -> Response {
        if let Self::TooYoung(name) = &self {
            tracing::debug!("Turned away {}", name);
        }
        (self.status_code(), Json(MessageResponse::new(self.message()))).into_response()
    }
}
