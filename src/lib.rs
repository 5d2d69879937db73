//! A single-endpoint HTTP greeting service.
//!
//! The service exists to give a deployment pipeline something real to build,
//! containerize, and roll out: it exposes `GET /welcome`, returns a fixed
//! plain-text greeting, and shuts down cleanly on SIGTERM. The listen address
//! and log format come from a TOML file, with the port overridable from the
//! environment or the command line.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
