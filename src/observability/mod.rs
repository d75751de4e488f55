//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatch path produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG or config)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through the trace span of every request
//! - Metrics are cheap (atomic increments); recording without an installed
//!   exporter is a no-op
//! - The path extractor itself never logs

pub mod logging;
pub mod metrics;
