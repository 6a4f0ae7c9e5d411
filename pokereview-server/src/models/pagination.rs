//! Pagination types
//!
//! Pages are zero-indexed everywhere: `pageNo=0` is the first page.

use serde::Deserialize;

/// Maximum items per page
const MAX_PAGE_SIZE: u32 = 100;

/// Default items per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (0-indexed)
    pub page_no: u32,
    /// Items per page (1..=100)
    pub page_size: u32,
}

impl Pagination {
    /// Create pagination, clamping page size to 1..=100.
    pub fn new(page_no: u32, page_size: u32) -> Self {
        Self {
            page_no,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        self.page_no as u64 * self.page_size as u64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_no: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of store results plus the totals needed to describe it
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    pub page_no: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Build a page from the slice of items the store returned for `page`.
    pub fn new(items: Vec<T>, total: i64, page: Pagination) -> Self {
        Self {
            items,
            total,
            page_no: page.page_no,
            page_size: page.page_size,
        }
    }

    /// Total number of pages. An empty result set has zero pages.
    pub fn total_pages(&self) -> u32 {
        let total = self.total.max(0) as u64;
        let size = self.page_size.max(1) as u64;
        total.div_ceil(size) as u32
    }

    /// Whether there is no page after this one.
    ///
    /// Pages past the end also count as last.
    pub fn is_last(&self) -> bool {
        self.page_no as u64 + 1 >= self.total_pages() as u64
    }

    /// Transform the items, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page_no: self.page_no,
            page_size: self.page_size,
        }
    }
}

/// Query parameters for pagination
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page_no: Option<u32>,
    pub page_size: Option<u32>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            params.page_no.unwrap_or(0),
            params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(total: i64, page_no: u32, page_size: u32) -> Page<()> {
        Page::new(vec![], total, Pagination::new(page_no, page_size))
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(0, 10).offset(), 0);
        assert_eq!(Pagination::new(1, 10).offset(), 10);
        assert_eq!(Pagination::new(2, 25).offset(), 50);
    }

    #[test]
    fn clamps_page_size() {
        assert_eq!(Pagination::new(0, 0).page_size, 1);
        assert_eq!(Pagination::new(0, 999).page_size, 100);
    }

    #[test]
    fn params_default_to_first_page_of_ten() {
        let page = Pagination::from(PaginationParams::default());
        assert_eq!(page, Pagination::new(0, 10));
    }

    #[test]
    fn total_pages() {
        assert_eq!(page_of(0, 0, 10).total_pages(), 0);
        assert_eq!(page_of(25, 0, 10).total_pages(), 3);
        assert_eq!(page_of(100, 0, 10).total_pages(), 10);
        assert_eq!(page_of(1, 0, 10).total_pages(), 1);
    }

    #[test]
    fn last_page_boundaries() {
        // 25 items, 10 per page: pages 0, 1, 2
        assert!(!page_of(25, 0, 10).is_last());
        assert!(!page_of(25, 1, 10).is_last());
        assert!(page_of(25, 2, 10).is_last());
        assert!(page_of(25, 3, 10).is_last());

        // exact multiple: 20 items -> pages 0, 1
        assert!(!page_of(20, 0, 10).is_last());
        assert!(page_of(20, 1, 10).is_last());

        // empty store: first page is also the last
        assert!(page_of(0, 0, 10).is_last());
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], 13, Pagination::new(1, 3)).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.total, 13);
        assert_eq!(page.page_no, 1);
        assert_eq!(page.page_size, 3);
    }
}
