//! Backend Module
//!
//! All server-side code for the Planetary API: an Axum HTTP server over a
//! SQLite store of planets and users.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, password recovery, tokens
//! - **`planets`** - Planet catalogue queries and handlers
//! - **`welcome`** - Greetings and the age gate
//! - **`middleware`** - Request extractors (bearer auth, bodies)
//! - **`mail`** - Outbound mail behind the `Mailer` trait
//! - **`db`** - Connection pool, schema, seed data
//! - **`error`** - Handler and startup error types
//! - **`cli`** - Subcommands of the server binary
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── cli.rs          - Command-line interface
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and tokens
//! ├── planets/        - Planet catalogue
//! ├── welcome/        - Greetings and age gate
//! ├── middleware/     - Extractors
//! ├── mail/           - Mail delivery
//! ├── db/             - Schema and seed data
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the pool, the token issuer, the
//! password hasher and the mailer. Handlers extract only what they need
//! through `FromRef`.
//!
//! # Error Handling
//!
//! - `ApiError` for handler outcomes and faults, rendered as JSON
//! - `ConfigError` / `InitError` at startup

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Planet catalogue
pub mod planets;

/// Greetings and age gate
pub mod welcome;

/// Request extractors
pub mod middleware;

/// Outbound mail
pub mod mail;

/// Database setup and seed data
pub mod db;

/// Backend error types
pub mod error;

/// Command-line interface
pub mod cli;

pub use error::{ApiError, ConfigError, InitError};
pub use server::{create_app, AppState, Config};
