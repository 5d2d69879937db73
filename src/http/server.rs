//! HTTP server startup logic.
//!
//! Binding is split from serving so a bind failure (port already in use)
//! surfaces as a distinct startup error before any connection is accepted.

use std::net::{SocketAddr, TcpListener};

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Addr(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server on the configured address.
///
/// Binds the listener, installs the shutdown signal handler, and serves until
/// the process is told to stop. This function blocks until shutdown completes.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| ServerError::Addr(format!("invalid http.host or http.port: {}", e)))?;

    let listener = bind(addr)?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Starting HTTP server");

    serve(app, listener, handle).await
}

/// Bind a TCP listener, failing fast when the address is unavailable.
pub fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let listener = TcpListener::bind(addr).map_err(|source| ServerError::Bind { addr, source })?;
    // Tokio's accept loop requires the listener in non-blocking mode.
    listener
        .set_nonblocking(true)
        .map_err(|source| ServerError::Bind { addr, source })?;
    Ok(listener)
}

/// Serve the router on an already-bound listener until the handle shuts down.
pub async fn serve(app: Router, listener: TcpListener, handle: Handle) -> Result<(), ServerError> {
    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
