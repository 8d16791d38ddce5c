//! Deep Inspector CLI
//!
//! Command-line interface for inspecting sites and running the service.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use inspector_core::InspectorConfig;

mod cli;
mod commands;
mod error;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    inspector_api::init_tracing(args.log_filter());

    let config_path = args.config.as_deref();
    match args.command {
        Command::Config { action } => {
            commands::handle_config_command(config_path, action, &mut std::io::stdout())?;
        }
        Command::Analyze { url, compact } => {
            let config = InspectorConfig::load(config_path)?;
            commands::cmd_analyze(&config, &url, compact, &mut std::io::stdout()).await?;
        }
        Command::Serve { host, port } => {
            let config = InspectorConfig::load(config_path)?;
            tracing::info!("Starting Deep Inspector service");
            commands::cmd_serve(config, host, port).await?;
        }
    }
    Ok(())
}
