//! Image models and portfolio projections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use mindseye_core::types::{DbId, Timestamp};

use crate::models::category::CategoryInfo;

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `{id, filename, title, description}` projection served for the
/// background and about images.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ImageSummary {
    pub id: DbId,
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// An image on a portfolio page, with the categories it is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioImage {
    pub id: DbId,
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<CategoryInfo>,
}

impl PortfolioImage {
    pub fn new(summary: ImageSummary, categories: Vec<CategoryInfo>) -> Self {
        Self {
            id: summary.id,
            filename: summary.filename,
            title: summary.title,
            description: summary.description,
            categories,
        }
    }
}

/// One page of the portfolio listing plus the unpaged match count.
#[derive(Debug, Clone)]
pub struct PortfolioPage {
    pub images: Vec<PortfolioImage>,
    pub total: i64,
}

/// A category link for one image, used to assemble [`PortfolioImage`]s.
#[derive(Debug, Clone, FromRow)]
pub struct ImageCategoryRow {
    pub image_id: DbId,
    pub id: DbId,
    pub name: String,
}

/// DTO for creating an image.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub filename: String,
    pub title: Option<String>,
    pub description: Option<String>,
}
