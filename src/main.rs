//! In-Memory Todo HTTP Service
//!
//! A small CRUD service built with Tokio and Axum. All state lives in one
//! in-process collection owned by the todo store; nothing is persisted and
//! everything is lost on restart.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────┐
//!                       │               TODO SERVICE                │
//!                       │                                           │
//!     Client Request    │  ┌─────────┐    ┌──────────┐             │
//!     ──────────────────┼─▶│  http   │───▶│  todos   │             │
//!                       │  │ server  │    │ handlers │             │
//!                       │  └─────────┘    └────┬─────┘             │
//!                       │                      │                   │
//!                       │                      ▼                   │
//!     Client Response   │               ┌──────────┐               │
//!     ◀─────────────────┼───────────────│TodoStore │               │
//!                       │               │ (Vec +   │               │
//!                       │               │  Mutex)  │               │
//!                       │               └──────────┘               │
//!                       │                                           │
//!                       │  Cross-cutting: config, tracing, request │
//!                       │  ids, request timeout, graceful shutdown │
//!                       └──────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::config::{self, ServiceConfig};
use todo_api::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("todo-api v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration: optional TOML file, then environment overrides
    let mut config = match std::env::var("TODO_CONFIG") {
        Ok(path) => config::load_config(Path::new(&path))?,
        Err(_) => ServiceConfig::default(),
    };
    config.apply_env();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
