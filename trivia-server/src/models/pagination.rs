//! Question list pagination
//!
//! The listing endpoints fetch the full ordered question set, format it,
//! and slice out one page in memory. `total_questions` in responses is the
//! count of the whole set, not of the page.

use serde::Deserialize;

/// Fixed number of questions per listing page
pub const PAGE_SIZE: usize = 10;

/// Pagination parameters (1-indexed page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
}

impl Pagination {
    /// Create pagination, clamping the page to a minimum of 1.
    ///
    /// Zero and negative pages are treated as page 1 rather than producing
    /// an out-of-range slice.
    pub fn new(page: i64) -> Self {
        Self {
            page: page.max(1) as usize,
        }
    }

    /// Parse a raw query-string value.
    ///
    /// Absent or non-numeric input falls back to page 1, matching the
    /// lenient coercion the API has always had.
    pub fn from_param(raw: Option<&str>) -> Self {
        let page = raw.and_then(|s| s.parse::<i64>().ok()).unwrap_or(1);
        Self::new(page)
    }

    /// Start index of this page's slice.
    ///
    /// Saturates instead of overflowing, so absurdly large page numbers
    /// degrade to an empty slice rather than a panic.
    pub fn start(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(PAGE_SIZE)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters accepted by the listing endpoints.
///
/// `page` is kept as a raw string so that non-numeric values degrade to
/// the default page instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        Self::from_param(params.page.as_deref())
    }
}

/// Slice one page out of a fully fetched sequence.
///
/// Returns `[(page-1)*PAGE_SIZE .. page*PAGE_SIZE)` clamped to the input
/// bounds; a page past the end yields an empty slice. Pure function, no
/// side effects.
pub fn page_slice<T>(items: &[T], page: Pagination) -> &[T] {
    let start = page.start().min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}
