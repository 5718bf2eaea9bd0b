//! Market data provider interface consumed by the refresh pipeline.

use crate::config::FetchWindow;
use crate::models::indicators::Candle;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("data source returned status {status}")]
    Status { status: u16 },
    #[error("data source error: {code} - {description}")]
    Api { code: String, description: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Chronologically ordered candles for `symbol` over `window`.
    ///
    /// An empty vector means the source had nothing for the symbol; callers
    /// treat it the same as a failure and skip the symbol.
    async fn get_candles(
        &self,
        symbol: &str,
        window: &FetchWindow,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
