/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the single container for everything handlers share:
 * - SQLite connection pool
 * - Token issuer (JWT signing keys and lifetimes)
 * - Password hasher (bcrypt cost)
 * - Mailer (pluggable outbound mail)
 *
 * It is built once by `init::build_state` (or directly in tests) and
 * cloned into each request. Every field is cheap to clone.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for only the part they
 * need, e.g. `State(pool): State<SqlitePool>`.
 */
use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::mail::Mailer;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `db_pool` - SQLite connection pool
/// * `tokens` - Signs and verifies identity and reset tokens
/// * `passwords` - Hashes and verifies passwords
/// * `mailer` - Delivers outbound mail
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// Clones share the same pool.
    pub db_pool: SqlitePool,

    /// Token issuer built from the configured signing secret
    pub tokens: TokenIssuer,

    /// Password hasher built from the configured bcrypt cost
    pub passwords: PasswordHasher,

    /// Outbound mail collaborator
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(
        db_pool: SqlitePool,
        tokens: TokenIssuer,
        passwords: PasswordHasher,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            db_pool,
            tokens,
            passwords,
            mailer,
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// Lets handlers extract the pool with `State(pool): State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}

/// Implement FromRef for the mailer
///
/// Lets handlers extract the mailer with `State(mailer): State<Arc<dyn Mailer>>`.
impl FromRef<AppState> for Arc<dyn Mailer> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.mailer.clone()
    }
}
