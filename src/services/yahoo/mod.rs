//! Yahoo Finance chart API integration.

pub mod client;
pub mod messages;
pub mod provider;

pub use client::YahooChartClient;
pub use provider::{chart_to_candles, YahooMarketDataProvider};
