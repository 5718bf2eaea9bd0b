//! Intraday signal dashboard: polls prices for a watchlist, derives
//! EMA/RSI/MACD signals and alerts when a symbol's signal changes.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod notifications;
pub mod render;
pub mod services;
pub mod signals;
