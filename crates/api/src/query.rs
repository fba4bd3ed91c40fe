//! Query parameter types for the catalog handlers.

use serde::Deserialize;

/// Page size used when `limit` is missing, malformed or zero.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Catalog paging parameters (`?limit=&offset=`).
///
/// Kept as raw strings so that garbage like `?limit=abc` falls back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogPageParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl CatalogPageParams {
    pub fn limit(&self) -> u32 {
        match parse_u32(self.limit.as_deref()) {
            Some(0) | None => DEFAULT_PAGE_LIMIT,
            Some(limit) => limit,
        }
    }

    pub fn offset(&self) -> u32 {
        parse_u32(self.offset.as_deref()).unwrap_or(0)
    }
}

fn parse_u32(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// `?term=` for name search. Missing means an empty term.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub term: String,
}

/// `?type=` for the type filter.
#[derive(Debug, Default, Deserialize)]
pub struct TypeParams {
    #[serde(rename = "type", default)]
    pub kind: String,
}
