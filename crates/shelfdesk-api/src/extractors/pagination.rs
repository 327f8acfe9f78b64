//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use shelfdesk_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
///
/// Values are kept as text so that a garbled `page` falls back to the
/// default instead of failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Items per page (default from config, max: 100).
    pub limit: Option<String>,
}

fn leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].parse().ok()
}

impl PaginationParams {
    /// Converts to a clamped `PageRequest`.
    pub fn into_page_request(self, default_limit: u64) -> PageRequest {
        PageRequest::from_query(
            self.page.as_deref().and_then(leading_int),
            self.limit.as_deref().and_then(leading_int),
            default_limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> PaginationParams {
        PaginationParams {
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(params(None, None).into_page_request(20), PageRequest::new(1, 20));
    }

    #[test]
    fn test_garbage_falls_back() {
        let req = params(Some("abc"), Some("")).into_page_request(20);
        assert_eq!(req, PageRequest::new(1, 20));
    }

    #[test]
    fn test_leading_digits_and_clamping() {
        let req = params(Some("3rd"), Some("500")).into_page_request(20);
        assert_eq!(req.page, 3);
        assert_eq!(req.limit, 100);

        let req = params(Some("-2"), Some("0")).into_page_request(20);
        assert_eq!(req, PageRequest::new(1, 1));
    }
}
