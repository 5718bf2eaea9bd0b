//! Environment-driven configuration for the dashboard.
//!
//! Every setting has a default so the dashboard starts with an empty
//! environment; only the alert channel stays off until both Telegram
//! variables are set.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_WATCHLIST: [&str; 5] = [
    "RELIANCE.NS",
    "TCS.NS",
    "INFY.NS",
    "SBIN.NS",
    "ICICIBANK.NS",
];
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("WATCHLIST must name at least one symbol")]
    EmptyWatchlist,
}

/// Deployment environment name, `sandbox` unless `ENVIRONMENT` is set.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production(environment: &str) -> bool {
    matches!(environment, "production" | "prod")
}

/// Bar interval and lookback range passed to the data source
/// (e.g. `5m` bars over `5d`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchWindow {
    pub interval: String,
    pub range: String,
}

impl FetchWindow {
    pub fn new(interval: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            interval: interval.into(),
            range: range.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub port: u16,
    pub watchlist: Vec<String>,
    pub symbol_suffix: String,
    pub refresh_interval_seconds: u64,
    pub live_window: FetchWindow,
    pub bias_window: FetchWindow,
    pub yahoo_base_url: String,
    pub telegram: Option<TelegramConfig>,
    pub http_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            watchlist: DEFAULT_WATCHLIST.iter().map(|s| s.to_string()).collect(),
            symbol_suffix: ".NS".to_string(),
            refresh_interval_seconds: 60,
            live_window: FetchWindow::new("5m", "5d"),
            bias_window: FetchWindow::new("1d", "3mo"),
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            telegram: None,
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl DashboardConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    /// for missing or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let watchlist = match get("WATCHLIST") {
            Some(raw) => {
                let symbols: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if symbols.is_empty() {
                    return Err(ConfigError::EmptyWatchlist);
                }
                symbols
            }
            None => defaults.watchlist,
        };

        let refresh_interval_seconds: u64 = parse_or(
            "REFRESH_INTERVAL_SECONDS",
            get("REFRESH_INTERVAL_SECONDS"),
            defaults.refresh_interval_seconds,
        )?;
        if refresh_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "REFRESH_INTERVAL_SECONDS",
                value: "0".to_string(),
            });
        }

        let timeout_seconds: u64 = parse_or(
            "HTTP_TIMEOUT_SECONDS",
            get("HTTP_TIMEOUT_SECONDS"),
            defaults.http_timeout.as_secs(),
        )?;

        let telegram = match (get("TELEGRAM_BOT_TOKEN"), get("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig {
                bot_token,
                chat_id,
                base_url: get("TELEGRAM_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_TELEGRAM_BASE_URL.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            watchlist,
            // An explicitly empty suffix is allowed, so read it raw.
            symbol_suffix: lookup("SYMBOL_SUFFIX").unwrap_or(defaults.symbol_suffix),
            refresh_interval_seconds,
            live_window: FetchWindow::new(
                get("LIVE_INTERVAL").unwrap_or(defaults.live_window.interval),
                get("LIVE_RANGE").unwrap_or(defaults.live_window.range),
            ),
            bias_window: FetchWindow::new(
                get("BIAS_INTERVAL").unwrap_or(defaults.bias_window.interval),
                get("BIAS_RANGE").unwrap_or(defaults.bias_window.range),
            ),
            yahoo_base_url: get("YAHOO_BASE_URL").unwrap_or(defaults.yahoo_base_url),
            telegram,
            http_timeout: Duration::from_secs(timeout_seconds),
        })
    }

    /// Symbol as shown in the tables, without the exchange suffix.
    pub fn display_symbol(&self, symbol: &str) -> String {
        if self.symbol_suffix.is_empty() {
            return symbol.to_string();
        }
        symbol
            .strip_suffix(self.symbol_suffix.as_str())
            .unwrap_or(symbol)
            .to_string()
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
