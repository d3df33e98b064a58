//! Sample users/posts API entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sample_api::api::create_router;
use sample_api::config::Config;
use sample_api::metrics;
use sample_api::utils::shutdown_signal;
use sample_api::ServiceError;

/// Sample users/posts JSON API.
#[derive(Parser, Debug)]
#[command(name = "sample-api")]
#[command(about = "Serves sample users and posts over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// HTTP port, overriding PORT.
    #[arg(short, long, global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load().map_err(ServiceError::from)?;
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("sample_api=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    if config.log_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SAMPLE API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen: {}:{}", config.host, config.port);
    match config.metrics_port {
        Some(port) => println!("  Metrics: {}:{}", config.host, port),
        None => println!("  Metrics: Disabled"),
    }
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(ServiceError::InvalidConfig(e).into());
    }
    let addr = config.bind_addr().map_err(ServiceError::InvalidConfig)?;

    // Initialize metrics
    if let Some(metrics_addr) = config.metrics_addr() {
        metrics::install_exporter(metrics_addr)?;
    }
    metrics::init_metrics();

    let listener = TcpListener::bind(addr).await.map_err(ServiceError::from)?;
    info!(version = env!("CARGO_PKG_VERSION"), "HTTP server listening on {}", addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServiceError::from)?;

    info!("HTTP server stopped");
    Ok(())
}
