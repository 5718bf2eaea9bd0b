//! Yahoo Finance market data provider implementation

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tracing::debug;

use super::client::YahooChartClient;
use super::messages::ChartResponse;
use crate::config::{DashboardConfig, FetchWindow};
use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};

pub struct YahooMarketDataProvider {
    client: YahooChartClient,
}

impl YahooMarketDataProvider {
    pub fn new(config: &DashboardConfig) -> Result<Self, MarketDataError> {
        let client = YahooChartClient::new(config.yahoo_base_url.clone(), config.http_timeout)?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: YahooChartClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        window: &FetchWindow,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let response = self.client.fetch_chart(symbol, window).await?;
        let candles = chart_to_candles(response);

        debug!(
            symbol = %symbol,
            interval = %window.interval,
            range = %window.range,
            count = candles.len(),
            "fetched {} candles for {}",
            candles.len(),
            symbol
        );

        Ok(candles)
    }
}

/// Flatten the first chart result into candles, dropping bars with any
/// missing price. A missing volume counts as zero.
pub fn chart_to_candles(response: ChartResponse) -> Vec<Candle> {
    let Some(result) = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
    else {
        return Vec::new();
    };
    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Vec::new();
    };

    let mut candles: Vec<Candle> = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let timestamp = Utc.timestamp_opt(ts, 0).single()?;
            let open = quote.open.get(i).copied().flatten()?;
            let high = quote.high.get(i).copied().flatten()?;
            let low = quote.low.get(i).copied().flatten()?;
            let close = quote.close.get(i).copied().flatten()?;
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0.0);
            Some(Candle::new(open, high, low, close, volume, timestamp))
        })
        .collect();

    candles.sort_by_key(|c| c.timestamp);
    candles
}
