//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    create_metrics_router, init_metrics, record_cache_lookup, record_cache_write_failure,
    record_http_request, CacheOutcome, PrometheusMetrics,
};
