//! connector-client CLI entry point.

use clap::Parser;
use connector_client::cli::{Cli, Commands, OutputFormat};
use connector_client::client::ConnectorClient;
use connector_client::output::{format_output, pretty};
use connector_client::version::BuildInfo;
use connector_core::{Connector, RequestContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "connector_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let connector: Connector = cli.connector.into();
    let context = match cli.base_url.clone() {
        // An explicit URL wins over host resolution.
        Some(base_url) => RequestContext::new(base_url),
        None => RequestContext::for_host(&connector.endpoints(), &cli.host_signal),
    };
    tracing::debug!(connector = %connector, base_url = context.base_url(), "resolved backend");

    let mut client = ConnectorClient::new(context);
    if let Some(token) = cli.token.as_deref() {
        client.login(token)?;
    }

    match cli.command {
        Commands::Endpoint => {
            println!("{}", client.base_url());
        }
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_health(&health)),
            }
        }
        Commands::Get { path } => {
            let value: serde_json::Value = client.get_json(&path).await?;
            println!("{}", format_output(&value, cli.format));
        }
        Commands::Version => {
            let info = BuildInfo::current();
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&info, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_build_info(&info)),
            }
        }
    }

    Ok(())
}
