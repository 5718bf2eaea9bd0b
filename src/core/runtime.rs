//! Owns the notifier state and publishes each cycle's dashboard.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::jobs::context::JobContext;
use crate::jobs::handlers::run_refresh_cycle;
use crate::jobs::types::CycleReport;
use crate::models::dashboard::DashboardSnapshot;
use crate::notifications::{InMemorySignalStore, SignalStore};

/// Latest published dashboard, read by the HTTP handlers.
pub type SharedDashboard = Arc<RwLock<DashboardSnapshot>>;

/// Configuration for the refresh runtime
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub refresh_interval_seconds: u64,
    pub symbols: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            refresh_interval_seconds: 60,
            symbols: crate::config::DEFAULT_WATCHLIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Drives refresh cycles. Only this struct touches the signal store, so
/// the store needs no lock.
pub struct DashboardRuntime {
    config: RuntimeConfig,
    context: Arc<JobContext>,
    store: Box<dyn SignalStore>,
    dashboard: SharedDashboard,
}

impl DashboardRuntime {
    pub fn new(config: RuntimeConfig, context: Arc<JobContext>) -> Self {
        Self::with_store(config, context, Box::new(InMemorySignalStore::new()))
    }

    pub fn with_store(
        config: RuntimeConfig,
        context: Arc<JobContext>,
        store: Box<dyn SignalStore>,
    ) -> Self {
        Self {
            config,
            context,
            store,
            dashboard: Arc::new(RwLock::new(DashboardSnapshot::default())),
        }
    }

    /// Handle to the published dashboard.
    pub fn dashboard(&self) -> SharedDashboard {
        self.dashboard.clone()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn SignalStore {
        self.store.as_ref()
    }

    /// Run one cycle over the watchlist and publish its rows.
    pub async fn tick(&mut self) -> CycleReport {
        let start = Instant::now();
        let report =
            run_refresh_cycle(&self.context, &self.config.symbols, self.store.as_mut()).await;
        let snapshot = report.to_snapshot();

        if snapshot.live.is_empty() {
            warn!(
                symbols = self.config.symbols.len(),
                "no live data fetched this cycle"
            );
        }

        if let Some(ref metrics) = self.context.metrics {
            metrics.refresh_cycles_total.inc();
            metrics
                .refresh_cycle_duration_seconds
                .observe(start.elapsed().as_secs_f64());
            metrics.live_rows.set(snapshot.live.len() as i64);
        }

        info!(
            live_rows = snapshot.live.len(),
            bias_rows = snapshot.bias.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "dashboard updated"
        );

        *self.dashboard.write().await = snapshot;
        report
    }
}
