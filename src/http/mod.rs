//! HTTP dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, tracing, timeout)
//!     → request.rs (raw target, query parameters)
//!     → routing (name/action tokens) → registry (ajaxlet lookup)
//!     → Ajaxlet::service
//!     → response.rs (JSON reply or mapped error)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use response::DispatchError;
pub use server::{dispatch, AppState, HttpServer};
