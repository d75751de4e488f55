//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use ajax_dispatch::config::DispatchConfig;
use ajax_dispatch::{HandlerRegistry, HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// A dispatcher running on an ephemeral local port.
pub struct TestDispatcher {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    // Used by dispatch_integration.rs; load_test.rs shares this module without it.
    #[allow(dead_code)]
    pub config_updates: mpsc::UnboundedSender<DispatchConfig>,
}

impl TestDispatcher {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a dispatcher serving `registry` with `config`.
pub async fn start_dispatcher(config: DispatchConfig, registry: HandlerRegistry) -> TestDispatcher {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (config_updates, config_rx) = mpsc::unbounded_channel();
    let server = HttpServer::new(config, registry);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, config_rx, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    TestDispatcher {
        addr,
        shutdown,
        config_updates,
    }
}

/// HTTP client that never goes through an environment proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
