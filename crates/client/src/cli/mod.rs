//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use connector_core::Connector;

/// CLI client for narrative connector backends.
#[derive(Debug, Parser)]
#[command(name = "connector-client")]
#[command(about = "CLI client for narrative connector backends", long_about = None)]
pub struct Cli {
    /// Connector deployment family to talk to.
    #[arg(long, default_value = "facebook")]
    pub connector: ConnectorArg,

    /// Host signal used to resolve the backend base URL.
    #[arg(long, env = "CONNECTOR_HOST", default_value = "")]
    pub host_signal: String,

    /// Explicit base URL, overriding host resolution.
    #[arg(long, env = "CONNECTOR_URL")]
    pub base_url: Option<String>,

    /// Bearer token for authenticated requests.
    #[arg(long, env = "CONNECTOR_TOKEN")]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Known connector deployment families.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConnectorArg {
    Facebook,
    S3,
}

impl From<ConnectorArg> for Connector {
    fn from(arg: ConnectorArg) -> Self {
        match arg {
            ConnectorArg::Facebook => Connector::Facebook,
            ConnectorArg::S3 => Connector::S3,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved backend base URL.
    Endpoint,
    /// Backend health check.
    Health,
    /// Issue a raw GET against the backend and print the JSON response.
    Get {
        /// Request path, e.g. /health.
        path: String,
    },
    /// Print build metadata.
    Version,
}
