/**
 * Password Hashing
 *
 * Passwords are stored only as bcrypt hashes. The work factor comes from
 * configuration so tests can use the minimum cost.
 */
use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hashes and verifies passwords with bcrypt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        hash(password, self.cost)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Comparison is constant-time (via bcrypt).
    pub fn verify(&self, password: &str, password_hash: &str) -> Result<bool, BcryptError> {
        verify(password, password_hash)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}
