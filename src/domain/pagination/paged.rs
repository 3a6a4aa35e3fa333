//! Paginated response envelope

use serde::{Deserialize, Serialize};

use super::filter::PaginationFilter;

/// Builds absolute URIs for pages of one collection
pub trait PageUriBuilder {
    fn page_uri(&self, filter: &PaginationFilter) -> String;
}

impl<F> PageUriBuilder for F
where
    F: Fn(&PaginationFilter) -> String,
{
    fn page_uri(&self, filter: &PaginationFilter) -> String {
        self(filter)
    }
}

/// Envelope wrapping one page of items with navigation metadata
///
/// Absent metadata serializes as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
}

impl<T> PagedResponse<T> {
    /// Wraps a full collection with no page metadata
    pub fn unpaginated(data: Vec<T>) -> Self {
        Self {
            data,
            page_number: None,
            page_size: None,
            next_page: None,
            previous_page: None,
        }
    }
}

/// Wraps a fetched page in an envelope with sibling links
///
/// The forward link is emitted for every non-empty page, including the
/// last one. The backward link is emitted from page 2 onwards. A filter
/// whose number or size is below 1 yields the unpaginated envelope.
pub fn create_paginated_response<T>(
    uri_builder: &impl PageUriBuilder,
    filter: &PaginationFilter,
    data: Vec<T>,
) -> PagedResponse<T> {
    if !filter.is_paginated() {
        return PagedResponse::unpaginated(data);
    }

    let next_page = filter
        .next()
        .filter(|_| !data.is_empty())
        .map(|next| uri_builder.page_uri(&next));

    let previous = filter.previous();
    let previous_page = (previous.page_number() >= 1).then(|| uri_builder.page_uri(&previous));

    PagedResponse {
        data,
        page_number: Some(filter.page_number()),
        page_size: Some(filter.page_size()),
        next_page,
        previous_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(filter: &PaginationFilter) -> String {
        format!(
            "http://localhost/api/items?pageNumber={}&pageSize={}",
            filter.page_number(),
            filter.page_size()
        )
    }

    fn page_of(filter: PaginationFilter) -> PagedResponse<i32> {
        let items: Vec<i32> = (1..=12).collect();
        create_paginated_response(&uri, &filter, filter.slice(items))
    }

    #[test]
    fn test_middle_page_has_both_links() {
        let page = page_of(PaginationFilter::new(2, 5));

        assert_eq!(page.data, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.page_number, Some(2));
        assert_eq!(page.page_size, Some(5));
        assert_eq!(
            page.previous_page.as_deref(),
            Some("http://localhost/api/items?pageNumber=1&pageSize=5")
        );
        assert_eq!(
            page.next_page.as_deref(),
            Some("http://localhost/api/items?pageNumber=3&pageSize=5")
        );
    }

    #[test]
    fn test_first_page_has_no_previous_link() {
        let page = page_of(PaginationFilter::new(1, 5));

        assert!(page.previous_page.is_none());
        assert_eq!(
            page.next_page.as_deref(),
            Some("http://localhost/api/items?pageNumber=2&pageSize=5")
        );
    }

    #[test]
    fn test_last_non_empty_page_links_forward() {
        let page = page_of(PaginationFilter::new(3, 5));

        assert_eq!(page.data, vec![11, 12]);
        assert_eq!(
            page.next_page.as_deref(),
            Some("http://localhost/api/items?pageNumber=4&pageSize=5")
        );
        assert_eq!(
            page.previous_page.as_deref(),
            Some("http://localhost/api/items?pageNumber=2&pageSize=5")
        );
    }

    #[test]
    fn test_empty_page_has_no_next_link() {
        let page = page_of(PaginationFilter::new(4, 5));

        assert!(page.data.is_empty());
        assert!(page.next_page.is_none());
        assert_eq!(
            page.previous_page.as_deref(),
            Some("http://localhost/api/items?pageNumber=3&pageSize=5")
        );
    }

    #[test]
    fn test_invalid_filter_produces_null_metadata() {
        for filter in [PaginationFilter::new(0, 5), PaginationFilter::new(2, 0)] {
            let page = page_of(filter);

            assert_eq!(page.data.len(), 12);
            assert!(page.page_number.is_none());
            assert!(page.page_size.is_none());
            assert!(page.next_page.is_none());
            assert!(page.previous_page.is_none());
        }
    }

    #[test]
    fn test_serializes_nulls_in_camel_case() {
        let page = PagedResponse::unpaginated(vec![1]);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "data": [1],
                "pageNumber": null,
                "pageSize": null,
                "nextPage": null,
                "previousPage": null
            })
        );
    }

    #[test]
    fn test_last_representable_page_has_no_next_link() {
        let page = create_paginated_response(&uri, &PaginationFilter::new(i32::MAX, 5), vec![1]);

        assert_eq!(page.page_number, Some(i32::MAX));
        assert!(page.next_page.is_none());
        assert!(page.previous_page.is_some());
    }
}
