//! Pagination types for list endpoints.
//!
//! A [`PageRequest`] is always normalized on construction: `page` is at
//! least 1 and `limit` lies in `[1, MAX_PAGE_SIZE]`. Out-of-range input
//! is clamped, never rejected.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping both values into range.
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: page.max(1) as u64,
            limit: limit.clamp(1, MAX_PAGE_SIZE as i64) as u64,
        }
    }

    /// Build a request from optional query values, applying defaults first.
    pub fn from_query(page: Option<i64>, limit: Option<i64>, default_limit: u64) -> Self {
        Self::new(page.unwrap_or(1), limit.unwrap_or(default_limit as i64))
    }

    /// Number of records to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// [`offset`](Self::offset) as a SQL `OFFSET` bind value. Saturates at
    /// `i64::MAX` so a far-out page reads as empty instead of going negative.
    pub fn sql_offset(&self) -> i64 {
        i64::try_from(self.offset()).unwrap_or(i64::MAX)
    }

    /// Total page count for `total` records; zero when there are no records.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }

    /// Take the `[offset, offset + limit)` window of an already-ordered
    /// collection. Windows past the end are empty.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        items
            .into_iter()
            .skip(skip)
            .take(self.limit as usize)
            .collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
///
/// Serialized as `{ data, total, page, limit, totalPages }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Total number of records in the collection.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Page size used for this response.
    pub limit: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(data: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            data,
            total,
            page: request.page,
            limit: request.limit,
            total_pages: request.total_pages(total),
        }
    }

    /// Slice an ordered in-memory collection and wrap the result.
    pub fn from_ordered(items: Vec<T>, request: &PageRequest) -> Self {
        let total = items.len() as u64;
        Self::new(request.slice(items), request, total)
    }

    /// Transform every item while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
