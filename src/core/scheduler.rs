//! Cron-based scheduler for dashboard refresh cycles

use crate::core::runtime::DashboardRuntime;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("refresh interval must be greater than zero")]
    Disabled,
    #[error(
        "refresh interval of {seconds}s cannot tick evenly; use a divisor of 60s, 60min or 24h"
    )]
    UnevenInterval { seconds: u64 },
    #[error("invalid cron expression '{expression}': {reason}")]
    InvalidCron { expression: String, reason: String },
}

/// Cron expression (`sec min hour day month weekday`) for an interval.
/// Cron steps restart at every minute, hour or day boundary, so only
/// intervals that divide 60s, 60min or 24h keep an even cadence.
pub fn cron_expression(interval_seconds: u64) -> Result<String, SchedulerError> {
    let uneven = || SchedulerError::UnevenInterval {
        seconds: interval_seconds,
    };
    match interval_seconds {
        0 => Err(SchedulerError::Disabled),
        s if s < 60 => {
            if 60 % s != 0 {
                return Err(uneven());
            }
            Ok(format!("*/{} * * * * *", s))
        }
        s if s < 3600 => {
            if s % 60 != 0 || 60 % (s / 60) != 0 {
                return Err(uneven());
            }
            Ok(format!("0 */{} * * * *", s / 60))
        }
        s if s < 86_400 => {
            if s % 3600 != 0 || 24 % (s / 3600) != 0 {
                return Err(uneven());
            }
            Ok(format!("0 0 */{} * * *", s / 3600))
        }
        86_400 => Ok("0 0 0 * * *".to_string()),
        _ => Err(uneven()),
    }
}

/// Runs a refresh cycle immediately and then on every cron tick.
pub struct RefreshScheduler {
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl RefreshScheduler {
    pub fn new(interval_seconds: u64) -> Result<Self, SchedulerError> {
        let expression = cron_expression(interval_seconds)?;
        let schedule =
            Schedule::from_str(&expression).map_err(|e| SchedulerError::InvalidCron {
                expression: expression.clone(),
                reason: e.to_string(),
            })?;

        info!(
            interval = interval_seconds,
            cron = %expression,
            "RefreshScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            expression
        );

        Ok(Self {
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Next time a cycle will run.
    pub fn next_tick(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.schedule.upcoming(chrono::Utc).next()
    }

    /// Move the runtime into a background task and start ticking.
    pub async fn start(&self, mut runtime: DashboardRuntime) {
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("RefreshScheduler: running initial refresh");
            runtime.tick().await;

            loop {
                match schedule.upcoming(chrono::Utc).next() {
                    Some(next_tick) => {
                        let now = chrono::Utc::now();
                        if next_tick > now {
                            let duration = (next_tick - now).to_std().unwrap_or_default();
                            tokio::time::sleep(duration).await;
                        }
                    }
                    None => {
                        warn!("RefreshScheduler: schedule has no upcoming ticks, retrying in 60s");
                        tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                        continue;
                    }
                }

                runtime.tick().await;
            }
        });

        *self.handle.write().await = Some(handle);
        info!("RefreshScheduler: started");
    }

    pub async fn stop(&self) {
        if let Some(handle) = self.handle.write().await.take() {
            handle.abort();
            info!("RefreshScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.handle.read().await.is_some()
    }
}
