//! HTTP route handlers.
//!
//! The service exposes a single route; everything else falls through to the
//! router's default 404. Request tracing is enabled via middleware that
//! generates a unique request ID for each incoming request.

pub mod welcome;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes.
///
/// Unmatched paths get the router's default 404 response and a wrong method
/// on a matched path gets the default 405, with no custom fallback logic.
pub fn create_router() -> Router {
    Router::new()
        .route("/welcome", get(welcome::welcome))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
