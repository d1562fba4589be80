//! Contact-form inquiries.
//!
//! Two site forms submit inquiries with different field names and
//! different required sets. Each is described by an [`InquiryForm`]
//! profile; both normalize into the same [`Inquiry`] and are rendered into
//! the same plain-text email.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Format of the submission timestamp in the email body.
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Acknowledgment returned to the submitter after a successful relay.
pub const ACKNOWLEDGMENT: &str = "Thank you for your inquiry! We will get back to you soon.";

// ---------------------------------------------------------------------------
// Inquiry
// ---------------------------------------------------------------------------

/// A normalized contact submission. All fields are trimmed; absent
/// optional fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_date: String,
    pub photography_type: String,
    pub budget: String,
    pub referral: String,
    pub message: String,
}

/// A field a form profile can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryField {
    Name,
    Email,
    Message,
}

impl InquiryField {
    fn label(self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Email => "email",
            InquiryField::Message => "message",
        }
    }

    fn value(self, inquiry: &Inquiry) -> &str {
        match self {
            InquiryField::Name => &inquiry.name,
            InquiryField::Email => &inquiry.email,
            InquiryField::Message => &inquiry.message,
        }
    }
}

/// Field profile of one contact endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryForm {
    /// The full inquiry form (`POST /api/send-email`).
    Detailed,
    /// The short contact form (`POST /simple-contact`).
    Simple,
}

impl InquiryForm {
    pub fn name(self) -> &'static str {
        match self {
            InquiryForm::Detailed => "detailed",
            InquiryForm::Simple => "simple",
        }
    }

    pub fn required_fields(self) -> &'static [InquiryField] {
        match self {
            InquiryForm::Detailed => &[InquiryField::Name, InquiryField::Email, InquiryField::Message],
            InquiryForm::Simple => &[InquiryField::Name, InquiryField::Email],
        }
    }

    /// Check that every required field is non-blank.
    ///
    /// The error message lists the required fields that are missing, e.g.
    /// `"Name and email are required"`.
    pub fn validate(self, inquiry: &Inquiry) -> Result<(), CoreError> {
        let missing: Vec<&str> = self
            .required_fields()
            .iter()
            .filter(|f| f.value(inquiry).is_empty())
            .map(|f| f.label())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(required_message(&missing)))
        }
    }
}

/// `["name"]` -> "Name is required"; `["name", "email", "message"]` ->
/// "Name, email, and message are required".
fn required_message(labels: &[&str]) -> String {
    let list = match labels {
        [] => return String::new(),
        [one] => return format!("{} is required", capitalize(one)),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    };
    format!("{} are required", capitalize(&list))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

impl Inquiry {
    pub fn subject(&self) -> String {
        format!("New Photography Inquiry from {}", self.name)
    }

    /// Plain-text email body embedding every field and the submission time.
    pub fn render_body(&self, submitted_at: Timestamp) -> String {
        format!(
            "New photography inquiry received from the Mind's Eye Photography website:\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Event Date: {event_date}\n\
             Photography Type: {photography_type}\n\
             Budget: {budget}\n\
             How they heard about us: {referral}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             Submitted on: {submitted} UTC\n\
             \n\
             ---\n\
             Reply directly to this email to respond to the client.\n",
            name = self.name,
            email = self.email,
            phone = self.phone,
            event_date = self.event_date,
            photography_type = self.photography_type,
            budget = self.budget,
            referral = self.referral,
            message = self.message,
            submitted = submitted_at.format(SUBMITTED_AT_FORMAT),
        )
    }
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// JSON body of `POST /api/send-email` (camelCase field names).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedInquiryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub event_date: Option<String>,
    pub photography_type: Option<String>,
    pub budget: Option<String>,
    pub hear_about: Option<String>,
    pub message: Option<String>,
}

/// JSON body of `POST /simple-contact` (snake_case field names).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SimpleInquiryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub event_date: Option<String>,
    pub photography_type: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
    pub referral: Option<String>,
}

fn clean(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl From<DetailedInquiryRequest> for Inquiry {
    fn from(req: DetailedInquiryRequest) -> Self {
        Self {
            name: clean(req.name),
            email: clean(req.email),
            phone: clean(req.phone),
            event_date: clean(req.event_date),
            photography_type: clean(req.photography_type),
            budget: clean(req.budget),
            referral: clean(req.hear_about),
            message: clean(req.message),
        }
    }
}

impl From<SimpleInquiryRequest> for Inquiry {
    fn from(req: SimpleInquiryRequest) -> Self {
        Self {
            name: clean(req.name),
            email: clean(req.email),
            phone: clean(req.phone),
            event_date: clean(req.event_date),
            photography_type: clean(req.photography_type),
            budget: clean(req.budget),
            referral: clean(req.referral),
            message: clean(req.message),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
