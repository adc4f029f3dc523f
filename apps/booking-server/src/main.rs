//! Booking server entry point.
//!
//! Loads layered configuration, installs logging, connects and migrates the
//! booking store, then serves the REST API until Ctrl-C.

mod config;
mod logging;

use anyhow::Result;
use booking_service::BookingServiceModule;
use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{AppConfig, CliOverrides};

/// Venue, artist and show booking server
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "BOOKING_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Store connection string, overrides the configuration
    #[arg(long)]
    database_url: Option<String>,

    /// Port to listen on, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        database_url: cli.database_url,
        port: cli.port,
    };
    let config = AppConfig::load(cli.config.as_deref(), &overrides)?;

    let _log_guard = logging::init(&config.logging)?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        migrations = config.database.run_migrations,
        "booking-server starting"
    );

    let module = BookingServiceModule::init(config.database.clone()).await?;
    serve(&config, module).await?;

    info!("booking-server stopped");
    Ok(())
}

/// Bind the listener and serve requests until Ctrl-C
async fn serve(config: &AppConfig, module: BookingServiceModule) -> Result<(), ServerError> {
    let listener = bind(&config.bind_address()).await?;
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("no local address: {e}")))?;

    info!(%addr, "Booking server listening");

    axum::serve(listener, module.router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Serve(format!("serve error: {e}")))?;

    Ok(())
}

/// Bind `host:port`; the host may be a name that resolves to an address
async fn bind(address: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(address)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {address}: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl-C, initiating graceful shutdown");
}

/// Errors that can occur when starting or running the server
#[derive(Debug, thiserror::Error)]
enum ServerError {
    /// Failed to bind to the network address
    #[error("bind error: {0}")]
    Bind(String),

    /// The server hit a fatal error while serving
    #[error("serve error: {0}")]
    Serve(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_to_a_hostname() {
        let listener = bind("localhost:0").await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn unresolvable_host_is_a_bind_error() {
        let err = bind("no-such-host.invalid:5000").await.unwrap_err();
        assert!(matches!(err, ServerError::Bind(_)));
    }
}
