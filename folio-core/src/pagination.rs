use crate::error::{FolioError, Result};
use std::ops::Range;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Page size and current page of one paginated list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    id: String,
    items_per_page: usize,
    current_page: usize,
}

impl Pagination {
    pub fn new(id: impl Into<String>, items_per_page: usize) -> Result<Self> {
        if items_per_page == 0 {
            return Err(FolioError::InvalidPageSize);
        }

        Ok(Self {
            id: id.into(),
            items_per_page,
            current_page: 1,
        })
    }

    /// Five items per page, starting on page one
    pub fn with_defaults(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            current_page: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// 1-based rank across the whole list of the item at `index_on_page`
    /// (0-based) on the current page
    /// Saturates at `usize::MAX` for pages far past the end
    pub fn absolute_index(&self, index_on_page: usize) -> usize {
        self.items_per_page
            .saturating_mul(self.current_page.saturating_sub(1))
            .saturating_add(index_on_page)
            .saturating_add(1)
    }

    /// Jump to `page` as given; the pager control only emits valid pages
    pub fn on_page_change(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Number of pages needed for `total` items (at least one)
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.items_per_page).max(1)
    }

    /// Indices of the current page's slice within a list of `total` items
    /// Empty for page zero and for pages past the end
    pub fn page_range(&self, total: usize) -> Range<usize> {
        let start = match self
            .current_page
            .checked_sub(1)
            .and_then(|skipped| skipped.checked_mul(self.items_per_page))
        {
            Some(start) if start < total => start,
            _ => return 0..0,
        };
        start..start.saturating_add(self.items_per_page).min(total)
    }
}
