//! Page query and page result.
//!
//! Page numbers are 1-based. Limit and offset are computed here and handed to
//! the repository explicitly.

use serde::{Deserialize, Serialize};

/// Page number used when none (or a non-positive one) is supplied
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when none (or a non-positive one) is supplied
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on a single page
pub const MAX_PAGE_SIZE: i64 = 500;

/// Normalised page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    page: i64,
    page_size: i64,
}

impl PageQuery {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let page_size = page_size
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        Self { page, page_size }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Total matching count plus one page of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total: i64,
    pub records: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(total: i64, records: Vec<T>) -> Self {
        Self { total, records }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            total: self.total,
            records: self.records.into_iter().map(f).collect(),
        }
    }
}
