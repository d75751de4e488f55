//! Ajax dispatcher (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌──────────────────────────────────────────────┐
//!     ──────────────────────────┼─▶ http::server (request id, trace, timeout)  │
//!                               │        │                                     │
//!                               │        ▼                                     │
//!                               │   routing::path ── name / action tokens      │
//!                               │        │                                     │
//!                               │        ▼                                     │
//!                               │   registry ── name → Arc<dyn Ajaxlet>        │
//!                               │        │                                     │
//!     Client Response           │        ▼                                     │
//!     ◀─────────────────────────┼── Ajaxlet::service → JSON                    │
//!                               │                                              │
//!                               │   config (TOML + watcher)  observability     │
//!                               └──────────────────────────────────────────────┘
//! ```
//!
//! The config file path is taken from the first argument or the
//! `AJAX_DISPATCH_CONFIG` environment variable; without one, defaults apply
//! and hot reload is disabled.

use std::path::PathBuf;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use ajax_dispatch::config::{load_config, ConfigWatcher, DispatchConfig};
use ajax_dispatch::observability::{logging, metrics};
use ajax_dispatch::registry::builtin::register_builtins;
use ajax_dispatch::{HandlerRegistry, HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os("AJAX_DISPATCH_CONFIG"))
        .map(PathBuf::from);

    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => DispatchConfig::default(),
    };

    logging::init_logging(&config.observability.log_level)?;

    tracing::info!("ajax-dispatch v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config = ?config_path,
        bind_address = %config.listener.bind_address,
        prefix = %config.dispatch.prefix,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let registry: HandlerRegistry = HandlerRegistry::new();
    register_builtins(&registry);

    // Keep the watcher alive for the lifetime of the server.
    let (_watcher, config_updates) = match &config_path {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        None => {
            let (_, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, registry);
    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
