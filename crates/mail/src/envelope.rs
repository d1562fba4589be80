//! Inquiry message assembly.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::Message;
use mindseye_core::inquiry::Inquiry;
use mindseye_core::types::Timestamp;

use crate::error::RelayError;

/// Fixed sender and recipient for inquiry emails.
///
/// Built once from configuration; each submission only supplies the
/// Reply-To address.
#[derive(Debug, Clone)]
pub struct InquiryEnvelope {
    from: Mailbox,
    to: Mailbox,
}

impl InquiryEnvelope {
    /// Parse the configured sender and studio recipient addresses.
    pub fn new(from: &str, to: &str) -> Result<Self, RelayError> {
        Ok(Self {
            from: from.parse()?,
            to: to.parse()?,
        })
    }

    pub fn recipient(&self) -> &Mailbox {
        &self.to
    }

    /// Build the plain-text email for an inquiry, with Reply-To set to the
    /// submitter so the studio can answer the client directly.
    pub fn compose(&self, inquiry: &Inquiry, submitted_at: Timestamp) -> Result<Message, RelayError> {
        let reply_to: Mailbox = inquiry
            .email
            .parse()
            .map_err(|e: lettre::address::AddressError| RelayError::InvalidReplyTo(e.to_string()))?;

        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(reply_to)
            .subject(inquiry.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(inquiry.render_body(submitted_at))
            .map_err(|e| RelayError::Build(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
