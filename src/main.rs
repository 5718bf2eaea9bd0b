//! One-shot refresh: fetch the watchlist once and print the three tables.

use dotenvy::dotenv;
use intradash::config::DashboardConfig;
use intradash::core::bootstrap::build_runtime;
use intradash::logging;
use intradash::render::render_dashboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = DashboardConfig::from_env()?;
    let mut runtime = build_runtime(config, None)?;

    runtime.tick().await;
    let snapshot = runtime.dashboard().read().await.clone();

    println!("{}", render_dashboard(&snapshot));
    Ok(())
}
