/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router, wrapped in a
 * `TraceLayer` so every request gets a tracing span.
 */
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::welcome_routes::configure_welcome_routes;
use crate::backend::server::state::AppState;
use crate::backend::welcome::not_found;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Pool, token issuer, password hasher and mailer
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// ## Fallback
///
/// Unknown routes get the same JSON 404 as `GET /not-found`.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_welcome_routes(router);
    let router = configure_api_routes(router);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
