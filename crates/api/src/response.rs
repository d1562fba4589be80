//! Shared response types for API handlers.

use serde::Serialize;

/// `{ "success": true, "message": ... }` acknowledgment returned by the
/// inquiry endpoints.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
