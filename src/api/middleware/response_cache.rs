//! Cache-aside decorator for read endpoints
//!
//! Successful JSON responses of `GET` requests are stored under a key
//! derived from the base URI the page links are built against, the request
//! path and its query. A later identical request
//! within the TTL is answered from the store without running the handler.
//! Store failures never change the response.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{OriginalUri, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::value::RawValue;
use tracing::{debug, warn};

use super::logging::matched_path;
use crate::api::types::{ApiError, BaseUri};
use crate::domain::cache::ResponseCacheKey;
use crate::infrastructure::cache::ResponseCacheService;
use crate::infrastructure::observability::{record_cache_lookup, record_cache_write_failure, CacheOutcome};

/// Store and TTL for one group of cached routes
#[derive(Debug, Clone)]
pub struct ResponseCacheState {
    service: Arc<ResponseCacheService>,
    ttl: Duration,
    public_base_url: Option<String>,
}

impl ResponseCacheState {
    pub fn new(service: Arc<ResponseCacheService>, ttl: Duration) -> Self {
        Self {
            service,
            ttl,
            public_base_url: None,
        }
    }

    /// Must match the base handed to handlers, cached bodies embed it in links
    pub fn with_public_base_url(mut self, base: Option<String>) -> Self {
        self.public_base_url = base;
        self
    }
}

pub async fn cache_responses(
    State(cache): State<ResponseCacheState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.0.clone())
        .unwrap_or_else(|| request.uri().clone());
    let base = BaseUri::resolve(cache.public_base_url.as_deref(), request.headers(), &uri);
    let key = ResponseCacheKey::new(base.as_str(), uri.path(), uri.query());
    let route = matched_path(&request);

    match cache.service.get_cached_response(&key).await {
        Ok(Some(body)) => {
            record_cache_lookup(&route, CacheOutcome::Hit);
            return cached(body);
        }
        Ok(None) => record_cache_lookup(&route, CacheOutcome::Miss),
        Err(e) => {
            warn!(key = %key, error = %e, "Response cache lookup failed, serving uncached");
            record_cache_lookup(&route, CacheOutcome::Error);
        }
    }

    let response = next.run(request).await;

    if !response.status().is_success() {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return ApiError::internal(format!("Failed to read response body: {}", e)).into_response();
        }
    };

    match serde_json::from_slice::<Box<RawValue>>(&bytes) {
        Ok(payload) => {
            let service = cache.service.clone();
            let ttl = cache.ttl;

            tokio::spawn(async move {
                if let Err(e) = service.cache_response(&key, &payload, ttl).await {
                    warn!(key = %key, error = %e, "Failed to store response in cache");
                    record_cache_write_failure(&route);
                }
            });
        }
        Err(e) => debug!(key = %key, error = %e, "Response body is not JSON, not caching"),
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn cached(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}
