//! Metrics collection and exposition.
//!
//! # Metrics
//! - `ajax_dispatch_requests_total` (counter): requests by ajaxlet, status
//! - `ajax_dispatch_duration_seconds` (histogram): dispatch latency
//! - `ajax_dispatch_unmatched_total` (counter): paths with no usable name
//!
//! # Design Decisions
//! - Labels carry the decoded ajaxlet name only when it is registered, so
//!   arbitrary client input cannot blow up label cardinality

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed dispatch.
pub fn record_dispatch(ajaxlet: &str, status: u16, started: Instant) {
    let ajaxlet = ajaxlet.to_string();
    let status = status.to_string();
    metrics::counter!(
        "ajax_dispatch_requests_total",
        "ajaxlet" => ajaxlet.clone(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "ajax_dispatch_duration_seconds",
        "ajaxlet" => ajaxlet,
        "status" => status
    )
    .record(started.elapsed().as_secs_f64());
}

/// Record a request whose path did not resolve to an ajaxlet name.
pub fn record_unmatched() {
    metrics::counter!("ajax_dispatch_unmatched_total").increment(1);
}
