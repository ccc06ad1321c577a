//! Public user profile returned by `GET /me`.

use serde::{Deserialize, Serialize};

/// User information that is safe to return to clients
///
/// Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}
