//! Shared Module
//!
//! This module contains the types the API puts on the wire. They are used by
//! the handlers to build responses and by clients (and the test suite) to
//! decode them.
//!
//! # Overview
//!
//! All types derive `Serialize`/`Deserialize` so they round-trip through the
//! JSON bodies returned by the server.

/// JSON message bodies
pub mod message;

/// Planet records
pub mod planet;

/// Public user profile
pub mod user;

/// Re-export commonly used types for convenience
pub use message::{MessageResponse, TokenResponse};
pub use planet::{NewPlanet, Planet};
pub use user::UserProfile;
