//! Pagination parameters

use serde::{Deserialize, Serialize};

/// Requested page of a collection
///
/// Page numbers are 1-based. A number or size below 1 is representable and
/// means the caller wants the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationFilter {
    page_number: i32,
    page_size: i32,
}

impl PaginationFilter {
    pub fn new(page_number: i32, page_size: i32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    pub fn page_number(&self) -> i32 {
        self.page_number
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    /// Returns true when both number and size select a real page
    pub fn is_paginated(&self) -> bool {
        self.page_number >= 1 && self.page_size >= 1
    }

    /// Number of items to skip before this page
    pub fn offset(&self) -> usize {
        if !self.is_paginated() {
            return 0;
        }

        let skipped = i64::from(self.page_number - 1) * i64::from(self.page_size);
        usize::try_from(skipped).unwrap_or(usize::MAX)
    }

    /// Maximum number of items on this page
    pub fn limit(&self) -> usize {
        if !self.is_paginated() {
            return usize::MAX;
        }

        usize::try_from(self.page_size).unwrap_or(usize::MAX)
    }

    /// Applies the filter to an already ordered list
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit())
            .collect()
    }

    /// The following page with the same size, `None` past the last representable page
    pub fn next(&self) -> Option<Self> {
        self.page_number
            .checked_add(1)
            .map(|page_number| Self::new(page_number, self.page_size))
    }

    /// The preceding page with the same size
    pub fn previous(&self) -> Self {
        Self::new(self.page_number.saturating_sub(1), self.page_size)
    }
}
