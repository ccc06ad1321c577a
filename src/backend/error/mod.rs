//! Backend Error Module
//!
//! This module defines the error types used by the server. Handler errors
//! convert into HTTP responses; startup errors are returned from `main`.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Handler error types (`ApiError`, `ParameterError`)
//! - **`conversion`** - `IntoResponse` for `ApiError`
//! - **`startup`** - Configuration and initialization errors
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Handler error types
//! ├── conversion.rs - Error conversion implementations
//! └── startup.rs    - ConfigError and InitError
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, so handlers can return it
//! directly. Every error renders as:
//!
//! ```json
//! { "message": "Bad email or password", "status": 401 }
//! ```
//!
//! Storage, hashing, token and mail faults are logged with their details and
//! answered with a generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// Startup error types
pub mod startup;

// Re-export commonly used types
pub use startup::{ConfigError, InitError};
pub use types::{ApiError, ParameterError};
