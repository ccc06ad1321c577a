/**
 * Error Conversion
 *
 * This module converts `ApiError` into an HTTP response.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Error message",
 *   "status": 400
 * }
 * ```
 */
use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_fault() {
            tracing::error!("Request failed: {}", self);
        } else if status.is_server_error() {
            tracing::warn!("Request rejected: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        let body = serde_json::json!({
            "message": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
