//! Pagination query parameters
//!
//! `limit` and `page` arrive as raw query strings. Both are sanitized first;
//! anything unparsable or out of range silently falls back to the default
//! rather than failing the request.

use serde::{Deserialize, Serialize};

use crate::validation::sanitize_query_param;

/// Default (and maximum) page size
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Highest page number a client may request
pub const MAX_PAGE: usize = 1000;

/// Page window over a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: usize,
    pub page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            page: 0,
        }
    }
}

impl Pagination {
    /// Build from raw `limit` and `page` query values
    pub fn from_query(limit: Option<&str>, page: Option<&str>) -> Self {
        let limit = parse_bounded(limit, DEFAULT_PAGE_LIMIT).unwrap_or(DEFAULT_PAGE_LIMIT);
        let page = parse_bounded(page, MAX_PAGE).unwrap_or(0);
        Self { limit, page }
    }

    /// Offset of the first item on the page
    pub fn start(&self) -> usize {
        self.page * self.limit
    }

    /// Offset one past the last item on the page
    pub fn end(&self) -> usize {
        self.start() + self.limit
    }
}

/// Parse a sanitized value accepted only within `1..=max`
fn parse_bounded(raw: Option<&str>, max: usize) -> Option<usize> {
    let value = sanitize_query_param(raw?);
    value
        .parse::<usize>()
        .ok()
        .filter(|v| (1..=max).contains(v))
}
