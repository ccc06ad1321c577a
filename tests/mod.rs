//! Test suite for the Planetary API
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
