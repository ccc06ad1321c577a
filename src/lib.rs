//! Planetary API - Main Library
//!
//! A small HTTP API over a planetary and user database, built on Axum and
//! SQLite. Users can register, log in, recover their password through a
//! short-lived reset token sent by mail, and browse the planet catalogue.
//!
//! # Module Structure
//!
//! The library is organized into two modules:
//!
//! - **`shared`** - Wire types returned by the API
//!   - Planet records, message bodies, user profiles
//!
//! - **`backend`** - Server-side code
//!   - Axum router and handlers
//!   - SQLite persistence with explicit SQL (sqlx)
//!   - bcrypt password hashing and JWT identity tokens
//!   - SMTP mail delivery (lettre)
//!   - Configuration, errors, schema tooling
//!
//! # Usage
//!
//! ```rust,no_run
//! use planetary_api::backend::server::{config::Config, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Handlers return `Result<_, ApiError>`, which renders as a JSON body
//!   `{"message": ..., "status": ...}`
//! - Startup returns `InitError` / `ConfigError`
//! - Custom error types live in `backend::error`

/// Shared wire types
pub mod shared;

/// Backend server-side code
pub mod backend;
