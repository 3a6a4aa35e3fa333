//! API middleware components

pub mod logging;
pub mod metrics;
pub mod response_cache;

pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
pub use response_cache::{cache_responses, ResponseCacheState};
