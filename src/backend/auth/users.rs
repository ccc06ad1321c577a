/**
 * User Model and Database Operations
 *
 * This module handles the `users` table. Every query is explicit SQL and
 * rows map through `sqlx::FromRow`.
 */
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::UserProfile;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Primary key
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Public view of the user, without the password hash
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }

    /// Version of the stored credential; moves on whenever the password changes
    pub fn credential_version(&self) -> i64 {
        self.updated_at.timestamp_micros()
    }
}

/// Fields for inserting a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Already hashed by the caller
    pub password_hash: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user` - Fields of the new user
///
/// # Returns
/// Created user, or a database error. A duplicate email fails with a
/// unique-constraint violation.
pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (first_name, last_name, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, first_name, last_name, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, first_name, last_name, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Replace a user's password hash
///
/// # Returns
/// `true` if a user with that email was updated
pub async fn update_password_hash(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET password_hash = ?, updated_at = ?
        WHERE email = ?
        "#,
    )
    .bind(password_hash)
    .bind(Utc::now())
    .bind(email)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Number of stored users
pub async fn count_users(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Whether a database error is a unique-constraint violation
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db_error) if db_error.is_unique_violation())
}
