//! Route definitions for site content, mounted under `/api`.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// ```text
/// GET /background-image   -> get_background_image
/// GET /portfolio          -> get_portfolio
/// GET /categories         -> get_categories
/// GET /about-content      -> get_about_content
/// GET /about-image        -> get_about_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/background-image", get(content::get_background_image))
        .route("/portfolio", get(content::get_portfolio))
        .route("/categories", get(content::get_categories))
        .route("/about-content", get(content::get_about_content))
        .route("/about-image", get(content::get_about_image))
}
