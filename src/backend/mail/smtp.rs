/**
 * SMTP Mailer
 *
 * Delivers mail through an SMTP relay using lettre's async transport on
 * the Tokio runtime. The connection uses STARTTLS and authenticates with the
 * configured credentials.
 */
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::{parse_mailbox, MailError, Mailer, OutgoingMail};
use crate::backend::server::config::MailConfig;

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer for the configured relay
    ///
    /// No connection is opened until the first message is sent.
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let from = parse_mailbox(&config.from)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        tracing::info!(
            "SMTP mailer configured for {}:{} as {}",
            config.server,
            config.port,
            config.from
        );

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(parse_mailbox(&mail.to)?)
            .subject(mail.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body)?;

        self.transport.send(message).await?;
        tracing::info!("Mail sent to {}", mail.to);
        Ok(())
    }
}
