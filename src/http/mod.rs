//! HTTP server module.
//!
//! Plain-HTTP serving with graceful shutdown on SIGTERM/SIGINT. TLS is not
//! terminated here; in the intended deployment the cluster ingress owns it.

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
