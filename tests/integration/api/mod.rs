//! API integration tests
//!
//! Integration tests for all API endpoints

mod planets_test;
mod welcome_test;
