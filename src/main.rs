// Standard library
use std::process::ExitCode;
use std::sync::Arc;

// 3rd party crates
use clap::Parser;
use tokio::signal::ctrl_c;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod functions;
mod probe;
mod responder;
mod settings;

// Project imports
use crate::settings::cli::{build_info, Cli};
use crate::settings::types::ConfigManager;

/// Main entry point for the DNS checker.
/// This application answers HTTP requests with the health of the local DNS
/// resolver, probed fresh on every request.
///
/// Features:
/// - Separate status pages for IPv4 and IPv6 loopback addressing
/// - Optional Consul checks, both forwarded through DNS and direct
/// - 200 when healthy, 503 with the failing stage otherwise
/// - Layered configuration from file, environment and command line
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.build {
        println!("{}", build_info());
        return ExitCode::SUCCESS;
    }

    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let config: Arc<ConfigManager> = match ConfigManager::new(&cli) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // setup logging.
    let log_level: String = config.get_log_level();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(format!(
            "{},hyper=error,hyper_util=error,axum=error",
            log_level
        ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .init();

    info!("⚙️ Settings have been loaded from {:?}.", config.config_path);

    // Create a broadcast channel for shutdown signal
    let (shutdown_tx, _) = broadcast::channel(1);
    let shutdown_tx_clone = shutdown_tx.clone();

    // Handle Ctrl+C
    tokio::spawn(async move {
        if let Err(e) = ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        info!("Received shutdown signal, initiating graceful shutdown...");
        let _ = shutdown_tx_clone.send(());
    });

    // Run the status page server with shutdown signal
    if let Err(e) = functions::run(config, shutdown_tx.subscribe()).await {
        error!("Application error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
