//! netpeek CLI - Network identity and local app port status
//!
//! A command-line tool for showing local/public IP addresses and checking
//! which of your registered apps are currently listening.

mod commands;

use clap::{Parser, Subcommand};
use netpeek_core::ports::RegistryRepository;
use netpeek_core::{AppConfig, RegistryStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netpeek")]
#[command(author, version, about = "CLI app to show network info and check ports")]
#[command(propagate_version = true, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show local IP, MAC address, and public IP
    Ip,

    /// Check apps in ports-list.json and show their status
    Ports,

    /// Edit your local ports-list.json
    #[command(name = "ports-edit")]
    PortsEdit,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = AppConfig::from_env()?;

    // Every command starts from an existing registry file.
    let registry = RegistryStore::new(&config);
    registry.ensure().await?;

    match cli.command {
        Commands::Ip => commands::ip::run(&config).await?,
        Commands::Ports => commands::ports::run(registry).await?,
        Commands::PortsEdit => commands::ports_edit::run(&registry).await?,
    }

    Ok(())
}
