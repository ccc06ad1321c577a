//! Authentication Module
//!
//! This module handles user registration, login, password recovery and
//! identity tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - bcrypt hashing
//! ├── sessions.rs     - JWT access and reset tokens
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: form with name, email and password → password hashed → user stored
//! 2. **Login**: email and password → credentials verified → access token returned
//! 3. **Me**: access token → token verified → profile returned
//! 4. **Recover**: email → reset token mailed → new password set with the token
//!
//! # Security
//!
//! - Passwords are stored as bcrypt hashes only
//! - Unknown email and wrong password give the same 401 on login
//! - Reset tokens expire after 15 minutes and are not accepted as access tokens

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, me, register, reset_password, retrieve_password};
pub use passwords::PasswordHasher;
pub use sessions::{Claims, TokenIssuer, TokenKind};
