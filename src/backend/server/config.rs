/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * into an explicit `Config` value that is passed to `create_app`.
 *
 * # Configuration Sources
 *
 * Values are read through a lookup function. `Config::from_env` uses the
 * process environment (after `dotenv` has loaded `.env`); tests pass a
 * closure over a map instead of mutating the environment.
 *
 * # Required Variables
 *
 * - `JWT_SECRET` - token-signing secret
 * - `MAIL_USERNAME`, `MAIL_PASSWORD` - SMTP credentials
 *
 * Missing mail credentials fail startup.
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::backend::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://planets.db?mode=rwc";
pub const DEFAULT_MAIL_SERVER: &str = "smtp.mailtrap.io";
pub const DEFAULT_MAIL_PORT: u16 = 2525;
pub const DEFAULT_MAIL_FROM: &str = "admin@planetary-api.com";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_ACCESS_TOKEN_TTL_MINUTES: u64 = 60;

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub mail: MailConfig,
    pub server: ServerConfig,
}

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
}

/// Token signing and password hashing settings
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_token_ttl: Duration,
    pub bcrypt_cost: u32,
}

/// SMTP relay settings
#[derive(Clone)]
pub struct MailConfig {
    pub server: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Load configuration through a lookup function
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use planetary_api::backend::server::config::Config;
    ///
    /// let vars = HashMap::from([
    ///     ("JWT_SECRET", "secret"),
    ///     ("MAIL_USERNAME", "user"),
    ///     ("MAIL_PASSWORD", "password"),
    /// ]);
    /// let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
    /// assert_eq!(config.server.port, 3000);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database: DatabaseConfig::from_lookup(&lookup),
            auth: AuthConfig::from_lookup(&lookup)?,
            mail: MailConfig::from_lookup(&lookup)?,
            server: ServerConfig::from_lookup(&lookup)?,
        })
    }
}

impl DatabaseConfig {
    /// Load only the database settings (used by the `db-*` commands)
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: optional(lookup, "DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        }
    }
}

impl AuthConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = required(lookup, "JWT_SECRET")?;

        let ttl_minutes: u64 = parse_or(
            lookup,
            "ACCESS_TOKEN_TTL_MINUTES",
            DEFAULT_ACCESS_TOKEN_TTL_MINUTES,
        )?;
        if ttl_minutes == 0 {
            return Err(ConfigError::invalid(
                "ACCESS_TOKEN_TTL_MINUTES",
                "0",
                "must be at least 1",
            ));
        }
        let ttl_seconds = ttl_minutes.checked_mul(60).ok_or_else(|| {
            ConfigError::invalid(
                "ACCESS_TOKEN_TTL_MINUTES",
                &ttl_minutes.to_string(),
                "too large",
            )
        })?;

        let bcrypt_cost: u32 = parse_or(lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::invalid(
                "BCRYPT_COST",
                &bcrypt_cost.to_string(),
                "must be between 4 and 31",
            ));
        }

        Ok(Self {
            jwt_secret,
            access_token_ttl: Duration::from_secs(ttl_seconds),
            bcrypt_cost,
        })
    }
}

impl MailConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from = optional(lookup, "MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string());
        if from.parse::<lettre::message::Mailbox>().is_err() {
            return Err(ConfigError::invalid("MAIL_FROM", &from, "not a mailbox"));
        }

        Ok(Self {
            server: optional(lookup, "MAIL_SERVER")
                .unwrap_or_else(|| DEFAULT_MAIL_SERVER.to_string()),
            port: parse_or(lookup, "MAIL_PORT", DEFAULT_MAIL_PORT)?,
            username: required(lookup, "MAIL_USERNAME")?,
            password: required(lookup, "MAIL_PASSWORD")?,
            from,
        })
    }
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: parse_or(lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
        })
    }

    /// Address the listener binds to (all interfaces)
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

// Secrets stay out of logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .finish()
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Read a variable, treating an empty value as unset
fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match optional(lookup, name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(name, &raw, e.to_string())),
        None => Ok(default),
    }
}
