//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs             - Module exports and documentation
//! ├── router.rs          - Main router creation
//! ├── welcome_routes.rs  - Greetings and age gate
//! └── api_routes.rs      - Planets and accounts
//! ```
//!
//! # Route Organization
//!
//! 1. **Welcome Routes** - `/`, `/super-simple`, `/not-found`, `/parameters`,
//!    `/url-variables/{name}/{age}`
//! 2. **API Routes** - `/planets`, `/planets/{planet_id}`, `/register`,
//!    `/login`, `/retrieve-password/{email}`, `/reset-password`, `/me`
//! 3. **Fallback Handler** - JSON 404 for anything else
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use planetary_api::backend::auth::{PasswordHasher, TokenIssuer};
//! use planetary_api::backend::mail::MemoryMailer;
//! use planetary_api::backend::routes::create_router;
//! use planetary_api::backend::server::state::AppState;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = planetary_api::backend::db::connect("sqlite::memory:").await?;
//! let state = AppState::new(
//!     pool,
//!     TokenIssuer::new("secret", Duration::from_secs(3600)),
//!     PasswordHasher::default(),
//!     Arc::new(MemoryMailer::new()),
//! );
//! let router = create_router(state);
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// Welcome and age-gate routes
pub mod welcome_routes;

/// Planet and account routes
pub mod api_routes;

pub use router::create_router;
