//! Sighthound request metrics.
//!
//! - Request counters by operation and status
//! - Latency histograms

use metrics::{counter, histogram};

/// Metric name constants.
pub mod names {
    /// Total API requests by operation and status.
    pub const REQUESTS_TOTAL: &str = "sighthound_requests_total";

    /// Request latency in seconds by operation.
    pub const LATENCY_SECONDS: &str = "sighthound_latency_seconds";
}

/// Status label for requests that never produced an HTTP status.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// Record metrics for a completed API request.
pub fn record_request(operation: &str, status: u16, latency_ms: f64) {
    counter!(
        names::REQUESTS_TOTAL,
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        names::LATENCY_SECONDS,
        "operation" => operation.to_string()
    )
    .record(latency_ms / 1000.0);
}
