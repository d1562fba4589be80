//! SMTP relay configuration and transport.

use std::fmt;

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::RelayError;

// ---------------------------------------------------------------------------
// SmtpConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Connection settings for the outbound SMTP relay.
#[derive(Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port (defaults to 587).
    pub port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, or if no sender address can
    /// be determined.
    ///
    /// | Variable        | Required | Default       |
    /// |-----------------|----------|---------------|
    /// | `SMTP_HOST`     | yes      |               |
    /// | `SMTP_PORT`     | no       | `587`         |
    /// | `SMTP_FROM`     | no       | `SMTP_USER`   |
    /// | `SMTP_USER`     | no       |               |
    /// | `SMTP_PASSWORD` | no       |               |
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        let username = std::env::var("SMTP_USER").ok();
        let from_address = std::env::var("SMTP_FROM").ok().or_else(|| username.clone())?;
        Some(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address,
            username,
            password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("from_address", &self.from_address)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// MailTransport
// ---------------------------------------------------------------------------

/// Sends fully assembled messages.
///
/// Implementations open and close their own session per call; nothing is
/// pooled between requests.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one message.
    async fn send(&self, message: Message) -> Result<(), RelayError>;

    /// Open an authenticated session and close it without sending.
    async fn verify(&self) -> Result<(), RelayError>;
}

// ---------------------------------------------------------------------------
// SmtpRelay
// ---------------------------------------------------------------------------

/// [`MailTransport`] backed by an authenticated STARTTLS SMTP relay.
#[derive(Debug)]
pub struct SmtpRelay {
    config: SmtpConfig,
}

impl SmtpRelay {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, RelayError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
            .port(self.config.port);

        if let (Some(user), Some(pass)) = (&self.config.username, &self.config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(builder.build())
    }
}

#[async_trait]
impl MailTransport for SmtpRelay {
    async fn send(&self, message: Message) -> Result<(), RelayError> {
        let mailer = self.transport()?;
        mailer.send(message).await?;

        tracing::info!(host = %self.config.host, port = self.config.port, "Email relayed");
        Ok(())
    }

    async fn verify(&self) -> Result<(), RelayError> {
        let mailer = self.transport()?;
        if mailer.test_connection().await? {
            tracing::info!(host = %self.config.host, "SMTP connection verified");
            Ok(())
        } else {
            Err(RelayError::Rejected(format!(
                "connection test to {} failed",
                self.config.host
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
