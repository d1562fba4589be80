//! Route definitions for contact inquiries.
//!
//! Two routers are provided:
//! - `api_router()` for the routes mounted under `/api`
//! - `page_router()` for the standalone contact page and its endpoint,
//!   mounted at the root

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// ```text
/// POST /send-email   -> send_email
/// GET  /test-email   -> test_email
/// ```
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/send-email", post(inquiry::send_email))
        .route("/test-email", get(inquiry::test_email))
}

/// ```text
/// GET  /contact-form     -> contact_form
/// POST /simple-contact   -> simple_contact
/// ```
pub fn page_router() -> Router<AppState> {
    Router::new()
        .route("/contact-form", get(inquiry::contact_form))
        .route("/simple-contact", post(inquiry::simple_contact))
}
