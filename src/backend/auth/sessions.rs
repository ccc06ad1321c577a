/**
 * Identity and Reset Tokens
 *
 * This module signs and verifies the JWTs handed out by the API.
 *
 * # Token Kinds
 *
 * - `Access` - issued by `/login`, presented as `Authorization: Bearer`
 * - `PasswordReset` - mailed by `/retrieve-password`, accepted only by
 *   `/reset-password`
 *
 * Both carry the user's email as the `sub` claim and are signed with
 * HS256 using the configured secret. A token of one kind is never
 * accepted where the other is expected.
 *
 * Reset tokens also carry `ver`, the credential version of the account when
 * the token was issued. Changing the password moves the version on, so a
 * reset token works at most once.
 */
use std::fmt;
use std::time::Duration;

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Lifetime of password-reset tokens
pub const RESET_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// What a token authorizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    PasswordReset,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User email
    pub sub: String,
    /// What the token authorizes
    pub kind: TokenKind,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Credential version, reset tokens only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ver: Option<i64>,
}

/// Signs and verifies tokens with a shared secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    reset_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, access_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            reset_ttl: RESET_TOKEN_TTL,
        }
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Create an access token whose subject is `email`
    pub fn issue_access_token(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(email, TokenKind::Access, self.access_ttl, None)
    }

    /// Create a short-lived password-reset token for `email`, bound to the
    /// account's current credential version
    pub fn issue_reset_token(
        &self,
        email: &str,
        credential_version: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue(
            email,
            TokenKind::PasswordReset,
            self.reset_ttl,
            Some(credential_version),
        )
    }

    /// Verify a token's signature, expiry and kind
    ///
    /// # Returns
    /// Decoded claims, or `InvalidToken` if the token is of another kind
    pub fn verify(
        &self,
        token: &str,
        expected: TokenKind,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        let claims = decode::<Claims>(token, &self.decoding, &validation)?.claims;

        if claims.kind != expected {
            return Err(ErrorKind::InvalidToken.into());
        }

        Ok(claims)
    }

    fn issue(
        &self,
        email: &str,
        kind: TokenKind,
        ttl: Duration,
        ver: Option<i64>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let exp = now
            .checked_add(ttl.as_secs())
            .ok_or(ErrorKind::InvalidToken)?;
        let claims = Claims {
            sub: email.to_string(),
            kind,
            iat: now,
            exp,
            ver,
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .field("reset_ttl", &self.reset_ttl)
            .finish_non_exhaustive()
    }
}

fn unix_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}
