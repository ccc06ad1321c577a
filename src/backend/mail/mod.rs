//! Mail Module
//!
//! Outbound mail is a pluggable collaborator. Handlers only see the
//! `Mailer` trait, held in `AppState` as `Arc<dyn Mailer>`.
//!
//! # Implementations
//!
//! - **`SmtpMailer`** - delivers through an SMTP relay with lettre
//! - **`MemoryMailer`** - records messages in memory (tests, local runs)
//!
//! Both parse the recipient as a mailbox before sending, so an address the
//! relay would refuse fails the same way everywhere.

use async_trait::async_trait;
use lettre::message::Mailbox;
use thiserror::Error;

/// In-memory mailer
pub mod memory;

/// SMTP mailer
pub mod smtp;

pub use memory::MemoryMailer;
pub use smtp::SmtpMailer;

/// A plain-text message to deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mailbox '{address}': {source}")]
    Address {
        address: String,
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Delivers outgoing mail
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

/// Parse an address into a lettre mailbox
pub fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse::<Mailbox>().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}
