//! HTTP-level integration tests for the contact inquiry endpoints.
//!
//! None of these routes touch the database, so the app is built over a lazy
//! pool and a [`RecordingTransport`] stands in for the SMTP relay.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, body_text, build_app, get, lazy_pool, post_json, post_raw, test_config,
    RecordingTransport, FALLBACK_CONTACT, STUDIO_RECIPIENT,
};
use serde_json::json;

fn detailed_form() -> serde_json::Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "608-555-0100",
        "eventDate": "2026-09-12",
        "photographyType": "Wedding",
        "budget": "$2,500+",
        "hearAbout": "Instagram",
        "message": "Looking for an evening ceremony shoot."
    })
}

// ---------------------------------------------------------------------------
// POST /api/send-email
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_inquiry_is_relayed_once_with_reply_to() {
    let mailer = RecordingTransport::new();
    let app = build_app(lazy_pool(), mailer.clone(), test_config());

    let response = post_json(app, "/api/send-email", detailed_form()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Thank you for your inquiry! We will get back to you soon."
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1, "exactly one email should be relayed");

    let message = &sent[0];
    assert_eq!(message.headers().get_raw("Reply-To"), Some("jane@example.com"));
    let to: Vec<String> = message.envelope().to().iter().map(|a| a.to_string()).collect();
    assert_eq!(to, vec![STUDIO_RECIPIENT.to_string()]);

    let formatted = String::from_utf8(message.formatted()).unwrap();
    assert!(formatted.contains("Event Date: 2026-09-12"));
    assert!(formatted.contains("How they heard about us: Instagram"));
}

#[tokio::test]
async fn blank_name_is_rejected_with_400() {
    let mailer = RecordingTransport::new();
    let app = build_app(lazy_pool(), mailer.clone(), test_config());

    let response = post_json(
        app,
        "/api/send-email",
        json!({"name": "", "email": "a@b.com", "message": "hi"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Name is required");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn detailed_form_requires_message() {
    let app = build_app(lazy_pool(), RecordingTransport::new(), test_config());

    let response = post_json(
        app,
        "/api/send-email",
        json!({"name": "Jane", "email": "jane@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Message is required");
}

#[tokio::test]
async fn unparseable_submitter_email_is_rejected_with_400() {
    let mailer = RecordingTransport::new();
    let app = build_app(lazy_pool(), mailer.clone(), test_config());

    let mut form = detailed_form();
    form["email"] = json!("jane at example dot com");

    let response = post_json(app, "/api/send-email", form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "A valid email address is required"
    );
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn smtp_auth_failure_returns_500_with_fallback_contact() {
    let mailer = RecordingTransport::failing("535 5.7.8 Username and Password not accepted");
    let app = build_app(lazy_pool(), mailer, test_config());

    let response = post_json(app, "/api/send-email", detailed_form()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "RELAY_ERROR");
    assert_eq!(
        json["error"],
        format!("Failed to send email. Please contact {FALLBACK_CONTACT} directly.")
    );
    assert!(
        !json.to_string().contains("535"),
        "SMTP detail must not reach the client"
    );
}

#[tokio::test]
async fn malformed_json_body_returns_json_bad_request() {
    let mailer = RecordingTransport::new();
    let app = build_app(lazy_pool(), mailer.clone(), test_config());

    let response = post_raw(app, "/api/send-email", Some("application/json"), "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn wrongly_typed_field_returns_json_bad_request() {
    let app = build_app(lazy_pool(), RecordingTransport::new(), test_config());

    let response = post_json(
        app,
        "/api/send-email",
        json!({"name": 123, "email": "jane@example.com", "message": "hi"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_content_type_returns_json_bad_request() {
    let app = build_app(lazy_pool(), RecordingTransport::new(), test_config());

    let body = detailed_form().to_string();
    let response = post_raw(app, "/api/send-email", None, &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// POST /simple-contact
// ---------------------------------------------------------------------------

#[tokio::test]
async fn simple_contact_accepts_missing_message() {
    let mailer = RecordingTransport::new();
    let app = build_app(lazy_pool(), mailer.clone(), test_config());

    let response = post_json(
        app,
        "/simple-contact",
        json!({
            "name": "Sam",
            "email": "sam@example.com",
            "event_date": "Next spring",
            "photography_type": "Portrait",
            "referral": "A friend"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].headers().get_raw("Reply-To"), Some("sam@example.com"));
    let formatted = String::from_utf8(sent[0].formatted()).unwrap();
    assert!(formatted.contains("Event Date: Next spring"));
    assert!(formatted.contains("How they heard about us: A friend"));
}

#[tokio::test]
async fn simple_contact_requires_name_and_email() {
    let app = build_app(lazy_pool(), RecordingTransport::new(), test_config());

    let response = post_json(app, "/simple-contact", json!({"message": "hello"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Name and email are required");
}

#[tokio::test]
async fn simple_contact_relay_failure_uses_fallback() {
    let app = build_app(
        lazy_pool(),
        RecordingTransport::failing("connection refused"),
        test_config(),
    );

    let response = post_json(
        app,
        "/simple-contact",
        json!({"name": "Sam", "email": "sam@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains(FALLBACK_CONTACT));
}

#[tokio::test]
async fn simple_contact_malformed_body_returns_json_bad_request() {
    let app = build_app(lazy_pool(), RecordingTransport::new(), test_config());

    let response = post_raw(app, "/simple-contact", Some("application/json"), "[1, 2").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// GET /api/test-email
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_email_reports_successful_connection() {
    let mailer = RecordingTransport::new();
    let app = build_app(lazy_pool(), mailer.clone(), test_config());

    let response = get(app, "/api/test-email").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "SMTP connection successful");
    assert!(mailer.sent().is_empty(), "diagnostic must not send mail");
}

#[tokio::test]
async fn test_email_reports_failed_connection() {
    let app = build_app(
        lazy_pool(),
        RecordingTransport::failing("535 authentication failed"),
        test_config(),
    );

    let response = get(app, "/api/test-email").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "SMTP connection failed");
}

// ---------------------------------------------------------------------------
// GET /contact-form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_form_page_is_html_posting_to_simple_contact() {
    let app = build_app(lazy_pool(), RecordingTransport::new(), test_config());

    let response = get(app, "/contact-form").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");

    let html = body_text(response).await;
    assert!(html.contains("<form"));
    assert!(html.contains("/simple-contact"));
}
