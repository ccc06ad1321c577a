//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs                - Module exports
//! ├── types.rs              - Request types
//! ├── register.rs           - POST /register
//! ├── login.rs              - POST /login
//! ├── retrieve_password.rs  - GET /retrieve-password/{email}
//! ├── reset_password.rs     - POST /reset-password
//! └── me.rs                 - GET /me
//! ```
//!
//! # Password Recovery Flow
//!
//! 1. `GET /retrieve-password/{email}` mails a 15 minute reset token
//! 2. `POST /reset-password` with that token sets a new password
//! 3. `POST /login` accepts only the new password from then on

/// Request types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Password recovery handler
pub mod retrieve_password;

/// Password reset handler
pub mod reset_password;

/// Current user handler
pub mod me;

pub use types::{LoginRequest, RegisterRequest, ResetPasswordRequest};

pub use login::login;
pub use me::me;
pub use register::register;
pub use reset_password::reset_password;
pub use retrieve_password::retrieve_password;
