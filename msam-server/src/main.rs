//! MSAM Server Binary

use anyhow::Result;
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};

use msam_config::{ConfigLoader, MsamConfig};
use msam_server::Server;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server bind address, e.g. 0.0.0.0:8080
    #[arg(short, long)]
    bind: Option<String>,

    /// Database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = ConfigLoader::new().load(cli.config.as_ref())?;

    // Override with CLI arguments
    apply_cli_overrides(&mut config, &cli)?;
    config.validate_all()?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Create and start server
    let server = Server::new(config).await?;
    server.start().await
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut MsamConfig, cli: &Cli) -> Result<()> {
    if let Some(bind) = &cli.bind {
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", bind, e))?;
        config.server.bind_address = addr.ip().to_string();
        config.server.port = addr.port();
    }

    if let Some(url) = &cli.database_url {
        config.database.url = url.clone();
    }

    Ok(())
}
