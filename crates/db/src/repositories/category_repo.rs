//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::{Category, CategoryInfo, CreateCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!("INSERT INTO categories (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Every category as `{id, name}`, ordered by ID.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<CategoryInfo>, sqlx::Error> {
        sqlx::query_as::<_, CategoryInfo>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
