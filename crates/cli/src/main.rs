use clap::Parser;
use ferrous_mdns_domain::{CliOverrides, Config};
use ferrous_mdns_infrastructure::mdns::MdnsServer;
use std::net::{IpAddr, Ipv4Addr};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "ferrous-mdns")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous mDNS - Multicast DNS responder")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// mDNS port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<IpAddr>,

    /// IPv4 address of the interface that joins the multicast group
    #[arg(short = 'i', long)]
    interface: Option<Ipv4Addr>,

    /// Window during which identical responses are sent only once
    #[arg(long, value_name = "MS")]
    cache_window_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        interface: cli.interface,
        cache_window_ms: cli.cache_window_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("Starting Ferrous mDNS v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = cli.config.clone().or_else(Config::get_config_path) {
        info!(path = %path, records = config.records.len(), "Configuration loaded");
    }

    let shutdown = CancellationToken::new();
    let server = MdnsServer::bind(&config)
        .await?
        .with_cancellation(shutdown.clone());

    let server_task = tokio::spawn(server.run());

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }

    info!("Shutdown signal received");
    shutdown.cancel();
    server_task.await?;

    info!("Server shutdown complete");
    Ok(())
}
