#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use lettre::Message;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use mindseye_api::config::{InquiryConfig, ServerConfig};
use mindseye_api::router::build_app_router;
use mindseye_api::state::AppState;
use mindseye_mail::{InquiryEnvelope, MailTransport, RelayError};

pub const STUDIO_SENDER: &str = "website@studio.test";
pub const STUDIO_RECIPIENT: &str = "inbox@studio.test";
pub const FALLBACK_CONTACT: &str = "hello@studio.test";

// ---------------------------------------------------------------------------
// Mail test double
// ---------------------------------------------------------------------------

/// Captures every message instead of sending it, or fails every call with
/// a fixed SMTP rejection.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Message>>,
    failure: Option<String>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A transport whose session is always refused, as on bad credentials.
    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        })
    }

    pub fn sent(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, message: Message) -> Result<(), RelayError> {
        if let Some(reason) = &self.failure {
            return Err(RelayError::Rejected(reason.clone()));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }

    async fn verify(&self) -> Result<(), RelayError> {
        match &self.failure {
            Some(reason) => Err(RelayError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        assets_dir: None,
        portfolio_max_per_page: None,
        inquiry: InquiryConfig {
            recipient: STUDIO_RECIPIENT.to_string(),
            fallback_contact: FALLBACK_CONTACT.to_string(),
        },
    }
}

/// Pool that never connects, for routes that do not touch the database.
pub fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://postgres@localhost/mindseye_unused")
        .unwrap()
}

/// Build the full application router using the given pool and transport.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_app(pool: PgPool, mailer: Arc<RecordingTransport>, config: ServerConfig) -> Router {
    let envelope = InquiryEnvelope::new(STUDIO_SENDER, &config.inquiry.recipient).unwrap();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer,
        envelope: Arc::new(envelope),
    };
    build_app_router(state, &config)
}

/// Router with a recording transport and default config.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, RecordingTransport::new(), test_config())
}

/// Router whose portfolio endpoint caps `per_page` at `max`.
pub fn build_test_app_with_page_cap(pool: PgPool, max: i64) -> Router {
    let mut config = test_config();
    config.portfolio_max_per_page = Some(max);
    build_app(pool, RecordingTransport::new(), config)
}

/// Router whose `/data` route serves `dir`.
pub fn build_test_app_with_assets(dir: PathBuf) -> Router {
    let mut config = test_config();
    config.assets_dir = Some(dir);
    build_app(lazy_pool(), RecordingTransport::new(), config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body, optionally without any `content-type` header.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
