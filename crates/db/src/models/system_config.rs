//! `system_config` rows.

use serde::Serialize;
use sqlx::FromRow;
use mindseye_core::error::CoreError;
use mindseye_core::system_config::{ConfigKey, ConfigValue};
use mindseye_core::types::Timestamp;

/// A row from the `system_config` table.
///
/// `value` is raw text; use [`SystemConfigEntry::decode`] to read it through
/// the key's declared kind.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SystemConfigEntry {
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}

impl SystemConfigEntry {
    pub fn decode(&self, key: ConfigKey) -> Result<ConfigValue, CoreError> {
        key.interpret(&self.value)
    }
}
