//! Repository for the `system_config` key-value table.

use sqlx::PgPool;
use mindseye_core::system_config::ConfigKey;

use crate::models::system_config::SystemConfigEntry;

/// Column list for `system_config` queries.
const COLUMNS: &str = "key, value, updated_at";

pub struct SystemConfigRepo;

impl SystemConfigRepo {
    /// Look up the row for a known key.
    pub async fn find(
        pool: &PgPool,
        key: ConfigKey,
    ) -> Result<Option<SystemConfigEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM system_config WHERE key = $1");
        sqlx::query_as::<_, SystemConfigEntry>(&query)
            .bind(key.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the value stored under a key.
    ///
    /// Content is normally written by the admin workflow; this exists for
    /// seeding and maintenance.
    pub async fn upsert(
        pool: &PgPool,
        key: ConfigKey,
        value: &str,
    ) -> Result<SystemConfigEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO system_config (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SystemConfigEntry>(&query)
            .bind(key.as_str())
            .bind(value)
            .fetch_one(pool)
            .await
    }
}
