/// Error type for composing and relaying inquiry emails.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// SMTP transport-level failure (connection, TLS, authentication, send).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A configured sender or recipient address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The submitter's address is unusable as a Reply-To mailbox.
    #[error("Invalid reply-to address: {0}")]
    InvalidReplyTo(String),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// The server refused the session without a transport error.
    #[error("SMTP session rejected: {0}")]
    Rejected(String),
}
