//! Intradash Dashboard Server
//!
//! Refreshes the watchlist on a fixed interval and serves the latest
//! tables, health and metrics over HTTP.

use dotenvy::dotenv;
use intradash::config::{get_environment, DashboardConfig};
use intradash::core::bootstrap::build_runtime;
use intradash::core::http::{start_server, AppState};
use intradash::core::scheduler::RefreshScheduler;
use intradash::logging;
use intradash::metrics::Metrics;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = DashboardConfig::from_env()?;
    let port = config.port;
    let interval = config.refresh_interval_seconds;

    info!("Starting Intradash Dashboard Server");
    info!(environment = %get_environment(), "Environment");
    info!(
        symbols = ?config.watchlist,
        interval = interval,
        "Refreshing {} symbols every {} seconds",
        config.watchlist.len(),
        interval
    );

    let metrics = Arc::new(Metrics::new()?);
    let runtime = build_runtime(config, Some(metrics.clone()))?;
    let state = AppState::new(metrics, runtime.dashboard());

    let scheduler = RefreshScheduler::new(interval)?;
    if let Some(next) = scheduler.next_tick() {
        info!(next_tick = %next, "First scheduled refresh after the initial run");
    }
    scheduler.start(runtime).await;

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    scheduler.stop().await;
    info!("Dashboard server stopped");
    Ok(())
}
