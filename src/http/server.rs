//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the dispatch and status handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Apply reloaded configuration without restarting
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::DispatchConfig;
use crate::http::request::{query_params, raw_target};
use crate::http::response::DispatchError;
use crate::observability::metrics;
use crate::registry::{AjaxCall, HandlerRegistry};
use crate::routing::split_tokens;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: HandlerRegistry,
    pub config: Arc<ArcSwap<DispatchConfig>>,
}

impl AppState {
    pub fn new(config: DispatchConfig, registry: HandlerRegistry) -> Self {
        Self {
            registry,
            config: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Publish a new configuration to in-flight and future requests.
    pub fn apply_config(&self, config: DispatchConfig) {
        tracing::info!(prefix = %config.dispatch.prefix, "Applying configuration");
        self.config.store(Arc::new(config));
    }
}

/// HTTP server for the ajax dispatcher.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and registry.
    pub fn new(config: DispatchConfig, registry: HandlerRegistry) -> Self {
        let request_timeout = Duration::from_secs(config.timeouts.request_secs);
        let state = AppState::new(config, registry);
        let router = Self::build_router(request_timeout, state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(request_timeout: Duration, state: AppState) -> Router {
        Router::new()
            .route("/_status", get(status_handler))
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(request_timeout))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configurations received on `config_updates` replace the current one.
    /// The server drains and stops once `shutdown` fires (or its sender is
    /// dropped) or on Ctrl+C.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<DispatchConfig>,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            ajaxlets = ?self.state.registry.names(),
            "HTTP server starting"
        );

        let state = self.state.clone();
        tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                state.apply_config(config);
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Resolve a raw request target to an ajaxlet and run it.
///
/// Returns the decoded ajaxlet name alongside its reply.
pub fn dispatch(
    registry: &HandlerRegistry,
    target: &str,
    prefix: &str,
) -> Result<(String, Value), DispatchError> {
    let tokens = split_tokens(target, prefix).ok_or(DispatchError::NotAjaxPath)?;
    let name = tokens.name.into_owned();

    let ajaxlet = registry
        .lookup(&name)
        .ok_or_else(|| DispatchError::UnknownAjaxlet(name.clone()))?;

    let call = AjaxCall {
        ajaxlet: name,
        action: tokens.action.map(|a| a.into_owned()),
        params: query_params(target),
    };

    match ajaxlet.service(&call) {
        Ok(reply) => Ok((call.ajaxlet, reply)),
        Err(source) => Err(DispatchError::Ajaxlet {
            ajaxlet: call.ajaxlet,
            source,
        }),
    }
}

/// Main dispatch handler; receives every path not claimed by another route.
async fn dispatch_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let started = Instant::now();
    let config = state.config.load();
    let target = raw_target(&uri);

    tracing::debug!(path = %target, prefix = %config.dispatch.prefix, "Dispatching request");

    match dispatch(&state.registry, target, &config.dispatch.prefix) {
        Ok((ajaxlet, reply)) => {
            metrics::record_dispatch(&ajaxlet, 200, started);
            Json(reply).into_response()
        }
        Err(err) => {
            match &err {
                DispatchError::NotAjaxPath | DispatchError::UnknownAjaxlet(_) => {
                    tracing::warn!(path = %target, error = %err, "No ajaxlet for request");
                    metrics::record_unmatched();
                }
                DispatchError::Ajaxlet { ajaxlet, source } => {
                    tracing::warn!(ajaxlet = %ajaxlet, error = %source, "Ajaxlet failed");
                    metrics::record_dispatch(ajaxlet, err.status().as_u16(), started);
                }
            }
            err.into_response()
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusReport {
    version: &'static str,
    prefix: String,
    ajaxlets: Vec<String>,
}

async fn status_handler(State(state): State<AppState>) -> Json<StatusReport> {
    Json(StatusReport {
        version: env!("CARGO_PKG_VERSION"),
        prefix: state.config.load().dispatch.prefix.clone(),
        ajaxlets: state.registry.names(),
    })
}

/// Wait for the shutdown broadcast or Ctrl+C.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = shutdown.recv() => {}
        _ = ctrl_c => {}
    }
    tracing::info!("Shutdown signal received");
}
