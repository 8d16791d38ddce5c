//! # inspector-api
//!
//! HTTP service for Deep Inspector.
//!
//! This crate provides:
//! - the axum router (`GET /`, `POST /analyze`, `GET /health`)
//! - the embedded single-page front end
//! - JSON error responses
//! - request tracing middleware
//! - a [`Server`] with graceful shutdown

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

pub use error::{ApiError, Error, Result};
pub use routes::{AppState, router};
pub use server::Server;

/// Install the `tracing` subscriber used by the binaries.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies. Records
/// from the `log` facade (used by inspector-core) are bridged in.
///
/// Only the first call installs a subscriber; later calls are no-ops, so
/// tests and binaries can both call it.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
