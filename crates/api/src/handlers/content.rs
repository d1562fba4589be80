//! Handlers for the admin-managed site content.
//!
//! All endpoints are public and read-only.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use mindseye_core::error::CoreError;
use mindseye_core::pagination::{total_pages, CategoryFilter, PageRequest};
use mindseye_core::system_config::{default_about_content, ConfigKey, ConfigValue, ImageSlot};
use mindseye_db::models::category::CategoryInfo;
use mindseye_db::models::image::{ImageSummary, PortfolioImage};
use mindseye_db::repositories::{CategoryRepo, ImageRepo, SystemConfigRepo};
use mindseye_db::DbPool;

use crate::error::AppResult;
use crate::query::PortfolioParams;
use crate::state::AppState;

/// Body of `GET /api/portfolio`.
#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub images: Vec<PortfolioImage>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
    pub per_page: i64,
}

// ---------------------------------------------------------------------------
// Configured images
// ---------------------------------------------------------------------------

/// GET /api/background-image
pub async fn get_background_image(State(state): State<AppState>) -> AppResult<Json<ImageSummary>> {
    let image = resolve_slot(&state.pool, ImageSlot::Background).await?;
    Ok(Json(image))
}

/// GET /api/about-image
pub async fn get_about_image(State(state): State<AppState>) -> AppResult<Json<ImageSummary>> {
    let image = resolve_slot(&state.pool, ImageSlot::About).await?;
    Ok(Json(image))
}

/// Follow a slot's config row to the image it names.
///
/// A missing row, a value that is not an image id, and an id with no
/// matching image are all reported as not-found.
async fn resolve_slot(pool: &DbPool, slot: ImageSlot) -> AppResult<ImageSummary> {
    let key = slot.key();
    let entry = SystemConfigRepo::find(pool, key)
        .await?
        .ok_or_else(|| CoreError::NotFound(slot.not_configured_message().into()))?;

    let image_id = match entry.decode(key) {
        Ok(ConfigValue::ImageRef(id)) => id,
        Ok(ConfigValue::Document(_)) | Err(CoreError::BadData(_)) => {
            tracing::warn!(key = key.as_str(), value = %entry.value, "Config value does not name an image");
            return Err(CoreError::NotFound(slot.not_found_message().into()).into());
        }
        Err(e) => return Err(e.into()),
    };

    let image = ImageRepo::find_summary(pool, image_id).await?.ok_or_else(|| {
        tracing::warn!(key = key.as_str(), image_id, "Config references a missing image");
        CoreError::NotFound(slot.not_found_message().into())
    })?;

    Ok(image)
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

/// GET /api/portfolio?page=&per_page=&category=
///
/// One page of portfolio images ordered by ID. `category` restricts the
/// listing to one category; `all` or absent means no restriction. The
/// response echoes the effective `per_page` after any configured cap.
pub async fn get_portfolio(
    State(state): State<AppState>,
    Query(params): Query<PortfolioParams>,
) -> AppResult<Json<PortfolioResponse>> {
    let page = PageRequest::from_query(
        params.page.as_deref(),
        params.per_page.as_deref(),
        state.config.portfolio_max_per_page,
    );
    let filter = CategoryFilter::from_query(params.category.as_deref());

    let result = ImageRepo::portfolio_page(&state.pool, filter, page).await?;

    Ok(Json(PortfolioResponse {
        pages: total_pages(result.total, page.per_page),
        images: result.images,
        total: result.total,
        current_page: page.page,
        per_page: page.per_page,
    }))
}

/// GET /api/categories
pub async fn get_categories(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryInfo>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(categories))
}

// ---------------------------------------------------------------------------
// About page
// ---------------------------------------------------------------------------

/// GET /api/about-content
///
/// Returns the stored JSON document verbatim, or the default copy when none
/// has been configured.
pub async fn get_about_content(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let key = ConfigKey::AboutContent;
    let Some(entry) = SystemConfigRepo::find(&state.pool, key).await? else {
        return Ok(Json(default_about_content()));
    };

    match entry.decode(key)? {
        ConfigValue::Document(doc) => Ok(Json(doc)),
        ConfigValue::ImageRef(_) => {
            Err(CoreError::BadData(format!("'{}' is not a document", key.as_str())).into())
        }
    }
}
