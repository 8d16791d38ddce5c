//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Deep Inspector - what is a site built with, and who registered it?
#[derive(Parser, Debug)]
#[command(name = "deep-inspector", version)]
#[command(about = "Inspect a web site's technology stack, address and registration", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "INSPECTOR_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inspect a site and print the report as JSON
    Analyze {
        /// URL or host name (e.g. example.com)
        url: String,

        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Run the HTTP service
    Serve {
        /// Interface to bind
        #[arg(long, env = "INSPECTOR_HOST")]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Write a default configuration file
    Init {
        /// Where to write (defaults to the platform config directory)
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Args {
    /// Log filter implied by `-v` flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info,inspector_core=info,inspector_api=info",
            1 => "info,inspector_core=debug,inspector_api=debug,deep_inspector=debug",
            _ => "debug,inspector_core=trace,inspector_api=trace,deep_inspector=trace",
        }
    }
}
