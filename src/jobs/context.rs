//! Context for dependency injection into the per-symbol handlers

use crate::config::DashboardConfig;
use crate::metrics::Metrics;
use crate::notifications::ChangeNotifier;
use crate::services::market_data::MarketDataProvider;
use std::sync::Arc;

/// Collaborators shared by every cycle. The notifier's per-symbol state is
/// not here; it is passed into each cycle by its owner.
pub struct JobContext {
    pub data_provider: Arc<dyn MarketDataProvider>,
    pub notifier: ChangeNotifier,
    pub config: Arc<DashboardConfig>,
    pub metrics: Option<Arc<Metrics>>,
}

impl JobContext {
    pub fn new(
        data_provider: Arc<dyn MarketDataProvider>,
        notifier: ChangeNotifier,
        config: Arc<DashboardConfig>,
        metrics: Option<Arc<Metrics>>,
    ) -> Self {
        Self {
            data_provider,
            notifier,
            config,
            metrics,
        }
    }
}
