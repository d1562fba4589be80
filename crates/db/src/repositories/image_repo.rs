//! Repository for the `images` and `image_categories` tables.

use std::collections::HashMap;

use sqlx::PgPool;
use mindseye_core::pagination::{CategoryFilter, PageRequest};
use mindseye_core::types::DbId;

use crate::models::category::CategoryInfo;
use crate::models::image::{
    CreateImage, Image, ImageCategoryRow, ImageSummary, PortfolioImage, PortfolioPage,
};

/// Column list for `images` queries.
const COLUMNS: &str = "id, filename, title, description, created_at, updated_at";

/// Column list for the `{id, filename, title, description}` projection.
const SUMMARY_COLUMNS: &str = "id, filename, title, description";

/// Matches every image when `$1` is NULL, otherwise only images linked to
/// category `$1`. `EXISTS` keeps one row per image.
const CATEGORY_PREDICATE: &str = "\
    ($1::BIGINT IS NULL OR EXISTS ( \
        SELECT 1 FROM image_categories ic \
        WHERE ic.image_id = images.id AND ic.category_id = $1))";

/// Provides image lookups and the paginated portfolio listing.
pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateImage) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (filename, title, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(&input.filename)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an image by ID, returning only the public summary columns.
    pub async fn find_summary(pool: &PgPool, id: DbId) -> Result<Option<ImageSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, ImageSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Link an image to a category. Linking twice is a no-op.
    pub async fn add_category(
        pool: &PgPool,
        image_id: DbId,
        category_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO image_categories (image_id, category_id) \
             VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(image_id)
        .bind(category_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Count images matching the filter.
    pub async fn count(pool: &PgPool, category_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM images WHERE {CATEGORY_PREDICATE}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// One page of the portfolio, ordered by image ID, with each image's
    /// categories attached.
    pub async fn portfolio_page(
        pool: &PgPool,
        filter: CategoryFilter,
        page: PageRequest,
    ) -> Result<PortfolioPage, sqlx::Error> {
        let category_id = match filter {
            CategoryFilter::All => None,
            CategoryFilter::Category(id) => Some(id),
            CategoryFilter::Unmatched => {
                return Ok(PortfolioPage {
                    images: Vec::new(),
                    total: 0,
                })
            }
        };

        let total = Self::count(pool, category_id).await?;

        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM images \
             WHERE {CATEGORY_PREDICATE} \
             ORDER BY id \
             LIMIT $2 OFFSET $3"
        );
        let summaries = sqlx::query_as::<_, ImageSummary>(&query)
            .bind(category_id)
            .bind(page.per_page)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = summaries.iter().map(|s| s.id).collect();
        let mut categories = Self::categories_for(pool, &ids).await?;

        let images = summaries
            .into_iter()
            .map(|s| {
                let cats = categories.remove(&s.id).unwrap_or_default();
                PortfolioImage::new(s, cats)
            })
            .collect();

        Ok(PortfolioPage { images, total })
    }

    /// Categories for each of the given images, keyed by image ID and
    /// ordered by category ID.
    pub async fn categories_for(
        pool: &PgPool,
        image_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<CategoryInfo>>, sqlx::Error> {
        if image_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, ImageCategoryRow>(
            "SELECT ic.image_id, c.id, c.name \
             FROM image_categories ic \
             JOIN categories c ON c.id = ic.category_id \
             WHERE ic.image_id = ANY($1) \
             ORDER BY ic.image_id, c.id",
        )
        .bind(image_ids)
        .fetch_all(pool)
        .await?;

        let mut by_image: HashMap<DbId, Vec<CategoryInfo>> = HashMap::new();
        for row in rows {
            by_image.entry(row.image_id).or_default().push(CategoryInfo {
                id: row.id,
                name: row.name,
            });
        }
        Ok(by_image)
    }
}
