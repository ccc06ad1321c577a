//! Middleware Module
//!
//! Request extractors shared by the handlers.
//!
//! - **`auth`** - `AuthUser`, which verifies a Bearer access token
//! - **`body`** - `JsonOrForm` and `FormBody`, which decode request bodies
//!   and report failures as `ApiError`
//!
//! # Example
//!
//! ```rust
//! use planetary_api::backend::middleware::AuthUser;
//!
//! async fn whoami(AuthUser(claims): AuthUser) -> String {
//!     claims.sub
//! }
//! ```

pub mod auth;
pub mod body;

pub use auth::AuthUser;
pub use body::{FormBody, JsonOrForm};
