//! Greeting and age-gate routes.

use axum::{routing::get, Router};

use crate::backend::server::state::AppState;
use crate::backend::welcome::{home, not_found, parameters, super_simple, url_variables};

/// Configure welcome routes
///
/// - `GET /` - Plain-text greeting
/// - `GET /super-simple` - JSON greeting
/// - `GET /not-found` - JSON 404
/// - `GET /parameters` - Age gate over the query string
/// - `GET /url-variables/{name}/{age}` - Age gate over the path
pub fn configure_welcome_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home))
        .route("/super-simple", get(super_simple))
        .route("/not-found", get(not_found))
        .route("/parameters", get(parameters))
        .route("/url-variables/{name}/{age}", get(url_variables))
}
