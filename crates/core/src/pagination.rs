//! Portfolio pagination and category filtering.
//!
//! Query parameters arrive as loose strings; anything that does not parse
//! falls back to the default rather than rejecting the request.

use crate::types::DbId;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PER_PAGE: i64 = 12;

/// Category filter value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// A normalized, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Build a page request from raw query values.
    ///
    /// `page` is clamped to at least 1 and `per_page` to at least 1.
    /// `max_per_page`, when set, bounds `per_page` from above; `None` leaves
    /// the page size uncapped. Missing or unparseable values use the
    /// defaults.
    pub fn from_query(
        page: Option<&str>,
        per_page: Option<&str>,
        max_per_page: Option<i64>,
    ) -> Self {
        let page = parse_int(page).unwrap_or(1).max(1);
        let mut per_page = parse_int(per_page).unwrap_or(DEFAULT_PER_PAGE).max(1);
        if let Some(max) = max_per_page {
            per_page = per_page.min(max.max(1));
        }
        Self { page, per_page }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// `ceil(total / per_page)`, or 0 for an empty result set.
pub fn total_pages(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// Restriction applied to the portfolio listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No restriction.
    All,
    /// Only images linked to this category.
    Category(DbId),
    /// A value that cannot name any category; matches nothing.
    Unmatched,
}

impl CategoryFilter {
    /// Interpret the raw `category` query value.
    ///
    /// Absent, empty, and `"all"` mean no filter.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(v) if v.eq_ignore_ascii_case(ALL_CATEGORIES) => CategoryFilter::All,
            Some(v) => v
                .parse()
                .map(CategoryFilter::Category)
                .unwrap_or(CategoryFilter::Unmatched),
        }
    }
}
