/**
 * In-Memory Mailer
 *
 * Records every message instead of delivering it. The recorded list is
 * shared between clones, so a test can keep one handle and give another
 * to `AppState`.
 */
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{parse_mailbox, MailError, Mailer, OutgoingMail};

#[derive(Debug, Clone, Default)]
pub struct MemoryMailer {
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, oldest first
    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        parse_mailbox(&mail.to)?;
        tracing::debug!("Recording mail to {}: {}", mail.to, mail.subject);
        self.sent.lock().await.push(mail);
        Ok(())
    }
}
