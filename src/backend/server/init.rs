/**
 * Server Initialization
 *
 * This module builds the application state from a `Config` and wires it
 * into the router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool
 * 2. Create the schema if it is missing
 * 3. Build the SMTP mailer
 * 4. Build the token issuer and password hasher
 * 5. Create the router
 *
 * Any failure aborts startup with an `InitError`.
 */
use std::sync::Arc;

use axum::Router;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::db::{connect, create_schema};
use crate::backend::error::InitError;
use crate::backend::mail::SmtpMailer;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::Config;
use crate::backend::server::state::AppState;

/// Build the shared application state
pub async fn build_state(config: &Config) -> Result<AppState, InitError> {
    let db_pool = connect(&config.database.url).await?;
    create_schema(&db_pool).await?;

    let mailer = SmtpMailer::new(&config.mail)?;
    tracing::info!(
        "SMTP relay configured: {}:{}",
        config.mail.server,
        config.mail.port
    );

    let tokens = TokenIssuer::new(&config.auth.jwt_secret, config.auth.access_token_ttl);
    let passwords = PasswordHasher::new(config.auth.bcrypt_cost);

    Ok(AppState::new(db_pool, tokens, passwords, Arc::new(mailer)))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &Config) -> Result<Router, InitError> {
    tracing::info!("Initializing Planetary API server");

    let app_state = build_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
