//! Handlers for contact-form inquiries.
//!
//! Both contact endpoints funnel into [`relay_inquiry`]; they differ only in
//! the request field names and the [`InquiryForm`] profile that decides
//! which fields are required.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use chrono::Utc;

use mindseye_core::error::CoreError;
use mindseye_core::inquiry::{
    DetailedInquiryRequest, Inquiry, InquiryForm, SimpleInquiryRequest, ACKNOWLEDGMENT,
};
use mindseye_mail::RelayError;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

const CONTACT_FORM_HTML: &str = include_str!("../../assets/contact_form.html");

/// POST /api/send-email
///
/// Full inquiry form. Name, email, and message are required.
pub async fn send_email(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<DetailedInquiryRequest>,
) -> AppResult<Json<SuccessResponse>> {
    relay_inquiry(&state, InquiryForm::Detailed, input.into()).await
}

/// POST /simple-contact
///
/// Short contact form. Name and email are required.
pub async fn simple_contact(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SimpleInquiryRequest>,
) -> AppResult<Json<SuccessResponse>> {
    relay_inquiry(&state, InquiryForm::Simple, input.into()).await
}

/// GET /contact-form
///
/// Standalone HTML page whose form posts to `/simple-contact`.
pub async fn contact_form() -> Html<&'static str> {
    Html(CONTACT_FORM_HTML)
}

/// GET /api/test-email
///
/// Open and close an authenticated SMTP session without sending anything.
pub async fn test_email(State(state): State<AppState>) -> AppResult<Json<SuccessResponse>> {
    state
        .mailer
        .verify()
        .await
        .map_err(AppError::SmtpUnavailable)?;

    Ok(Json(SuccessResponse::new("SMTP connection successful")))
}

/// Validate an inquiry against its form profile and send it to the studio.
///
/// One attempt, no retry. A failure after validation is reported with the
/// configured fallback contact so the submitter can still reach the studio.
async fn relay_inquiry(
    state: &AppState,
    form: InquiryForm,
    inquiry: Inquiry,
) -> AppResult<Json<SuccessResponse>> {
    form.validate(&inquiry)?;

    let message = state
        .envelope
        .compose(&inquiry, Utc::now())
        .map_err(|e| match e {
            RelayError::InvalidReplyTo(_) => {
                AppError::Core(CoreError::Validation("A valid email address is required".into()))
            }
            other => relay_failure(state, other),
        })?;

    state
        .mailer
        .send(message)
        .await
        .map_err(|e| relay_failure(state, e))?;

    tracing::info!(
        form = form.name(),
        name = %inquiry.name,
        email = %inquiry.email,
        "Inquiry relayed",
    );

    Ok(Json(SuccessResponse::new(ACKNOWLEDGMENT)))
}

fn relay_failure(state: &AppState, source: RelayError) -> AppError {
    AppError::Relay {
        fallback_contact: state.config.inquiry.fallback_contact.clone(),
        source,
    }
}
