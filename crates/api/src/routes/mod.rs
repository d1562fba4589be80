pub mod content;
pub mod health;
pub mod inquiry;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /background-image        current homepage background (GET)
/// /portfolio               paginated portfolio, ?page=&per_page=&category= (GET)
/// /categories              all categories (GET)
/// /about-content           about page document (GET)
/// /about-image             about page image (GET)
///
/// /send-email              relay a full inquiry (POST)
/// /test-email              verify SMTP credentials (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(content::router())
        .merge(inquiry::api_router())
}
