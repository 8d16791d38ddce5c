//! Deep Inspector HTTP server entry point.
//!
//! Reads configuration from `$INSPECTOR_CONFIG` or the platform config
//! directory; `PORT` and `INSPECTOR_HOST` override the listen address.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use inspector_api::{Server, init_tracing};
use inspector_core::InspectorConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,inspector_core=info,inspector_api=info");

    let mut config = InspectorConfig::load(None)?;
    config.apply_env()?;

    tracing::info!(bind = %config.bind_addr(), "Starting Deep Inspector");
    Server::new(&config)?.run().await?;
    Ok(())
}
