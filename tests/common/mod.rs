//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory database fixtures
//! - A full application behind `axum_test::TestServer`
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod test_app;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
pub use test_app::*;
