//! Pagination domain - Page filters and the paginated envelope

mod filter;
mod paged;

pub use filter::PaginationFilter;
pub use paged::{create_paginated_response, PageUriBuilder, PagedResponse};
