//! Outbound email for contact inquiries.
//!
//! - [`SmtpConfig`]: relay host, port, and credentials, loaded from the
//!   environment.
//! - [`MailTransport`]: the seam handlers send through; [`SmtpRelay`] is the
//!   lettre-backed implementation.
//! - [`InquiryEnvelope`]: turns a validated inquiry into a lettre
//!   [`Message`](lettre::Message) addressed to the studio.

pub mod envelope;
pub mod error;
pub mod smtp;

pub use envelope::InquiryEnvelope;
pub use error::RelayError;
pub use smtp::{MailTransport, SmtpConfig, SmtpRelay};
