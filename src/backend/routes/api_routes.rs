/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Planets
 * - `GET /planets` - Every planet
 * - `GET /planets/{planet_id}` - One planet
 *
 * ## Accounts
 * - `POST /register` - User registration (form)
 * - `POST /login` - User login (JSON or form)
 * - `GET /retrieve-password/{email}` - Mail a reset token
 * - `POST /reset-password` - Set a new password with a reset token
 * - `GET /me` - Current user (requires a Bearer access token)
 */
use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, me, register, reset_password, retrieve_password};
use crate::backend::planets::{list_planets, planet_details};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Authentication
///
/// Only `/me` requires a token; it is checked by the `AuthUser` extractor.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Planet catalogue
        .route("/planets", get(list_planets))
        .route("/planets/{planet_id}", get(planet_details))
        // Accounts
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/retrieve-password/{email}", get(retrieve_password))
        .route("/reset-password", post(reset_password))
        .route("/me", get(me))
}
