use std::sync::Arc;

use mindseye_mail::{InquiryEnvelope, MailTransport};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mindseye_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Outbound mail transport. Each call opens its own SMTP session.
    pub mailer: Arc<dyn MailTransport>,
    /// Sender and studio recipient for inquiry emails.
    pub envelope: Arc<InquiryEnvelope>,
}
