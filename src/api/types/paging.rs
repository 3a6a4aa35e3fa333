//! Paging query parameters

use serde::Deserialize;

use crate::domain::pagination::PaginationFilter;

/// `pageNumber` / `pageSize` query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParameters {
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
}

impl PageParameters {
    /// Resolves the filter, taking absent values from `default`
    ///
    /// Values below 1 are kept as given; they select the unpaginated listing.
    pub fn filter(&self, default: PaginationFilter) -> PaginationFilter {
        PaginationFilter::new(
            self.page_number.unwrap_or(default.page_number()),
            self.page_size.unwrap_or(default.page_size()),
        )
    }
}
