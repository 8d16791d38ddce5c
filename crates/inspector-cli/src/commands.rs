//! Command handlers.
//!
//! Handlers take the loaded configuration and an output sink, so they can
//! be driven from tests as well as from `main`.

use std::io::Write;
use std::path::PathBuf;

use inspector_api::Server;
use inspector_core::config::PROJECT_NAME;
use inspector_core::{Inspector, InspectorConfig};

use crate::cli::ConfigAction;
use crate::error::{Error, Result};

/// Inspect `url` and print the report.
pub async fn cmd_analyze(
    config: &InspectorConfig,
    url: &str,
    compact: bool,
    out: &mut impl Write,
) -> Result<()> {
    let inspector = Inspector::from_config(config)?;
    let report = inspector.inspect(url).await?;
    let json = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

/// Run the HTTP service until Ctrl-C.
pub async fn cmd_serve(
    mut config: InspectorConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    Server::new(&config)?.run().await?;
    Ok(())
}

/// Dispatch a `config` subcommand.
pub fn handle_config_command(
    config_path: Option<&str>,
    action: ConfigAction,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Init { file, force } => {
            cmd_config_init(file.as_deref().or(config_path), force, out)
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>, out: &mut impl Write) -> Result<()> {
    let path = InspectorConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::Usage("Could not determine config directory for this platform".to_string())
    })?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Write a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool, out: &mut impl Write) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => InspectorConfig::default_config_path()
            .ok_or_else(|| Error::Usage("Could not determine config directory".to_string()))?,
    };

    if path.exists() && !force {
        return Err(Error::Usage(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, InspectorConfig::default().to_toml_string()?)?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}
