//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/portfolio`.
///
/// Kept as raw strings so malformed numbers fall back to defaults instead of
/// failing extraction; see [`mindseye_core::pagination`].
#[derive(Debug, Default, Deserialize)]
pub struct PortfolioParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub category: Option<String>,
}
