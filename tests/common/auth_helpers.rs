//! Authentication test helpers
//!
//! Provides utilities for creating test users and logging them in.

use axum_test::TestServer;
use planetary_api::backend::auth::users::{create_user, NewUser};
use planetary_api::backend::auth::PasswordHasher;
use planetary_api::shared::TokenResponse;
use sqlx::SqlitePool;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
}

/// Create a test user in the database
pub async fn create_test_user(
    pool: &SqlitePool,
    passwords: &PasswordHasher,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let user = create_user(
        pool,
        &NewUser {
            first_name: "William".to_string(),
            last_name: "Herschel".to_string(),
            email: email.to_string(),
            password_hash: passwords.hash(password)?,
        },
    )
    .await?;

    Ok(TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
    })
}

/// Log in through the API and return the access token
pub async fn login_token(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();
    response.json::<TokenResponse>().access_token
}
