//! Server Module
//!
//! Configuration, shared state and startup for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (database, auth, mail, listener)
//! └── init.rs         - State construction and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `Config::from_env` after `dotenv`
//! 2. **State Creation**: pool, schema, mailer, token issuer, password hasher
//! 3. **Router Creation**: all routes, fallback and trace layer

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::Config;
pub use init::{build_state, create_app};
pub use state::AppState;
