//! Ajax dispatch front-end.
//!
//! Extracts the ajaxlet name and action from request paths such as
//! `/ajax/MyPlugin/Friend?x=1` and resolves the name through an explicit
//! [`HandlerRegistry`]. The [`http`] module wires both into an Axum server.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod registry;
pub mod routing;

pub use config::DispatchConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::{AjaxCall, Ajaxlet, AjaxletError, HandlerRegistry};
pub use routing::{extract_action, extract_name};
