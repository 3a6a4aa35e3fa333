//! Absolute URI construction for links and `Location` headers

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, Uri},
};
use url::form_urlencoded;

use crate::api::state::AppState;
use crate::domain::pagination::{PageUriBuilder, PaginationFilter};

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// Scheme and authority the client used to reach the service, e.g. `https://host:8443`
///
/// A configured public base URL wins over request headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUri(String);

impl BaseUri {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into().trim_end_matches('/').to_string())
    }

    /// Uses the configured public base when present, otherwise the request head
    pub fn resolve(public_base_url: Option<&str>, headers: &HeaderMap, uri: &Uri) -> Self {
        match public_base_url {
            Some(base) => Self::new(base),
            None => Self::from_request_head(headers, uri),
        }
    }

    /// Derives the base from forwarding headers, then `Host`, then the request URI
    pub fn from_parts(parts: &Parts) -> Self {
        Self::from_request_head(&parts.headers, &parts.uri)
    }

    fn from_request_head(headers: &HeaderMap, uri: &Uri) -> Self {
        let scheme = first_header_value(headers, FORWARDED_PROTO)
            .or_else(|| uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| "http".to_string());

        let host = first_header_value(headers, FORWARDED_HOST)
            .or_else(|| first_header_value(headers, header::HOST.as_str()))
            .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
            .unwrap_or_else(|| "localhost".to_string());

        Self(format!("{}://{}", scheme, host))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute URI for a route such as `/api/authors/{id}`
    pub fn join(&self, route: &str) -> String {
        format!("{}{}", self.0, route)
    }

    /// Page link builder for the collection at `route`
    pub fn collection(&self, route: impl Into<String>) -> CollectionUri {
        CollectionUri {
            base: self.clone(),
            route: route.into(),
            params: Vec::new(),
        }
    }
}

fn first_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl FromRequestParts<AppState> for BaseUri {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self::resolve(
            state.settings.public_base_url.as_deref(),
            &parts.headers,
            &parts.uri,
        ))
    }
}

/// Builds `{base}{route}?{params}&pageNumber=n&pageSize=s` links for one collection
#[derive(Debug, Clone)]
pub struct CollectionUri {
    base: BaseUri,
    route: String,
    params: Vec<(&'static str, String)>,
}

impl CollectionUri {
    /// Carries a filter parameter into every page link; `None` is skipped
    pub fn with_param(mut self, name: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.params.push((name, value.to_string()));
        }
        self
    }
}

impl PageUriBuilder for CollectionUri {
    fn page_uri(&self, filter: &PaginationFilter) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(&self.params);
        serializer.append_pair("pageNumber", &filter.page_number().to_string());
        serializer.append_pair("pageSize", &filter.page_size().to_string());

        format!("{}?{}", self.base.join(&self.route), serializer.finish())
    }
}
