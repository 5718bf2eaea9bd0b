//! HTTP client for the Yahoo Finance chart API.

use std::time::Duration;

use super::messages::ChartResponse;
use crate::config::FetchWindow;
use crate::services::market_data::MarketDataError;

pub struct YahooChartClient {
    base_url: String,
    http: reqwest::Client,
}

impl YahooChartClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MarketDataError> {
        let http = reqwest::Client::builder()
            .user_agent("Mozilla/5.0")
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(base_url, http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// `GET /v8/finance/chart/{symbol}?interval=..&range=..`
    ///
    /// Yahoo reports unknown symbols with a non-2xx status and a JSON error
    /// body, so the body is parsed before the status is checked.
    pub async fn fetch_chart(
        &self,
        symbol: &str,
        window: &FetchWindow,
    ) -> Result<ChartResponse, MarketDataError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("interval", window.interval.as_str()),
                ("range", window.range.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: ChartResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(MarketDataError::Status {
                    status: status.as_u16(),
                })
            }
            Err(e) => return Err(MarketDataError::Malformed(e.to_string())),
        };

        if let Some(error) = &parsed.chart.error {
            return Err(MarketDataError::Api {
                code: error.code.clone(),
                description: error.description.clone(),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::Status {
                status: status.as_u16(),
            });
        }

        Ok(parsed)
    }
}
