//! Full application fixture for integration tests
//!
//! Builds the real router over an in-memory database, a fast bcrypt cost
//! and a `MemoryMailer`, and serves it through `axum_test::TestServer`.

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use planetary_api::backend::auth::{PasswordHasher, TokenIssuer};
use planetary_api::backend::mail::MemoryMailer;
use planetary_api::backend::routes::create_router;
use planetary_api::backend::server::state::AppState;

use super::auth_helpers::{create_test_user, TestUser};
use super::database::TestDatabase;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_EMAIL: &str = "test@test.com";
pub const TEST_PASSWORD: &str = "P@ssw0rd";

pub struct TestApp {
    pub server: TestServer,
    pub db: TestDatabase,
    pub mailer: MemoryMailer,
    pub tokens: TokenIssuer,
    pub passwords: PasswordHasher,
}

impl TestApp {
    /// Application over an empty database
    pub async fn new() -> Self {
        let db = TestDatabase::new().await;
        let mailer = MemoryMailer::new();
        let tokens = TokenIssuer::new(TEST_SECRET, Duration::from_secs(3600));
        let passwords = PasswordHasher::new(4);

        let state = AppState::new(
            db.pool().clone(),
            tokens.clone(),
            passwords,
            Arc::new(mailer.clone()),
        );
        let server = TestServer::new(create_router(state)).expect("Failed to start test server");

        Self {
            server,
            db,
            mailer,
            tokens,
            passwords,
        }
    }

    /// Application with `TEST_EMAIL` / `TEST_PASSWORD` registered
    pub async fn with_user() -> (Self, TestUser) {
        let app = Self::new().await;
        let user = create_test_user(app.db.pool(), &app.passwords, TEST_EMAIL, TEST_PASSWORD)
            .await
            .expect("Failed to create test user");
        (app, user)
    }
}
