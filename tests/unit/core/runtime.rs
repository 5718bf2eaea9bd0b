//! Refresh runtime against scripted market data

use std::sync::Arc;

use intradash::config::DashboardConfig;
use intradash::core::{build_runtime_with, DashboardRuntime};
use intradash::jobs::types::SymbolError;
use intradash::metrics::Metrics;
use intradash::models::signal::{Bias, Signal};
use intradash::services::market_data::MarketDataError;
use tokio_test::{assert_err, assert_ok};

use crate::fixtures::{
    downtrend_candles, flat_candles, uptrend_candles, RecordingSink, Scripted, ScriptedProvider,
};

const LIVE: &str = "5m";
const DAILY: &str = "1d";

fn runtime(
    watchlist: &[&str],
    provider: Arc<ScriptedProvider>,
    sink: Arc<RecordingSink>,
) -> DashboardRuntime {
    let config = DashboardConfig {
        watchlist: watchlist.iter().map(|s| s.to_string()).collect(),
        ..DashboardConfig::default()
    };
    build_runtime_with(config, provider, sink, None)
}

#[tokio::test]
async fn test_buy_buy_sell_across_cycles_sends_two_alerts() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.push("TCS.NS", LIVE, Scripted::Candles(uptrend_candles()));
    provider.push("TCS.NS", LIVE, Scripted::Candles(uptrend_candles()));
    provider.push("TCS.NS", LIVE, Scripted::Candles(downtrend_candles()));
    let sink = Arc::new(RecordingSink::default());
    let mut runtime = runtime(&["TCS.NS"], provider, sink.clone());

    let mut triggered = Vec::new();
    for _ in 0..3 {
        triggered.push(runtime.tick().await.alerts_triggered());
    }

    assert_eq!(triggered, vec![1, 0, 1]);
    let signals: Vec<Signal> = sink.alerts().iter().map(|a| a.signal).collect();
    assert_eq!(signals, vec![Signal::Buy, Signal::Sell]);
    assert_eq!(runtime.store().last_signal("TCS.NS"), Some(Signal::Sell));
}

#[tokio::test]
async fn test_alert_carries_exchange_symbol() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.push("INFY.NS", LIVE, Scripted::Candles(uptrend_candles()));
    let sink = Arc::new(RecordingSink::default());
    let mut runtime = runtime(&["INFY.NS"], provider, sink.clone());

    runtime.tick().await;

    let alerts = sink.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].symbol, "INFY.NS");
}

#[tokio::test]
async fn test_empty_series_skips_symbol() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.push("SBIN.NS", LIVE, Scripted::Candles(Vec::new()));
    provider.push("TCS.NS", LIVE, Scripted::Candles(uptrend_candles()));
    let sink = Arc::new(RecordingSink::default());
    let mut runtime = runtime(&["SBIN.NS", "TCS.NS"], provider, sink);

    let report = runtime.tick().await;

    assert!(matches!(report.live[0].result, Err(SymbolError::NoData)));
    assert_ok!(&report.live[1].result);

    let dashboard = runtime.dashboard();
    let dashboard = dashboard.read().await;
    let symbols: Vec<&str> = dashboard.live.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["TCS"]);
}

#[tokio::test]
async fn test_fetch_failure_does_not_stop_cycle() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.push("RELIANCE.NS", LIVE, Scripted::Fail);
    provider.push("TCS.NS", LIVE, Scripted::Candles(uptrend_candles()));
    let sink = Arc::new(RecordingSink::default());
    let mut runtime = runtime(&["RELIANCE.NS", "TCS.NS"], provider.clone(), sink.clone());

    let report = runtime.tick().await;

    assert!(matches!(
        report.live[0].result,
        Err(SymbolError::Fetch(MarketDataError::Malformed(_)))
    ));
    assert_eq!(report.live[1].result.as_ref().unwrap().signal, Signal::Buy);
    assert_eq!(sink.alerts().len(), 1);

    // Live pass first, then the bias pass, both in watchlist order.
    let calls = provider.calls();
    assert_eq!(
        calls,
        vec![
            ("RELIANCE.NS".to_string(), LIVE.to_string()),
            ("TCS.NS".to_string(), LIVE.to_string()),
            ("RELIANCE.NS".to_string(), DAILY.to_string()),
            ("TCS.NS".to_string(), DAILY.to_string()),
        ]
    );
}

#[tokio::test]
async fn test_short_history_is_insufficient() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.push("TCS.NS", LIVE, Scripted::Candles(flat_candles(20)));
    let sink = Arc::new(RecordingSink::default());
    let mut runtime = runtime(&["TCS.NS"], provider, sink.clone());

    let report = runtime.tick().await;

    let error = assert_err!(&report.live[0].result);
    assert_eq!(error.reason(), "insufficient_data");
    assert!(sink.alerts().is_empty());
    assert!(runtime.store().last_signal("TCS.NS").is_none());
}

#[tokio::test]
async fn test_publishes_all_three_tables() {
    let provider = Arc::new(ScriptedProvider::new());
    for symbol in ["TCS.NS", "INFY.NS"] {
        provider.push(symbol, LIVE, Scripted::Candles(uptrend_candles()));
    }
    provider.push("TCS.NS", DAILY, Scripted::Candles(uptrend_candles()));
    provider.push("INFY.NS", DAILY, Scripted::Candles(downtrend_candles()));
    let sink = Arc::new(RecordingSink::default());
    let mut runtime = runtime(&["TCS.NS", "INFY.NS"], provider, sink);

    assert!(runtime.dashboard().read().await.updated_at.is_none());
    let report = runtime.tick().await;
    assert_eq!(report.skipped(), 0);

    let dashboard = runtime.dashboard();
    let dashboard = dashboard.read().await;
    assert_eq!(dashboard.updated_at, Some(report.finished_at));

    let live: Vec<(&str, Signal)> = dashboard
        .live
        .iter()
        .map(|r| (r.symbol.as_str(), r.signal))
        .collect();
    assert_eq!(live, vec![("TCS", Signal::Buy), ("INFY", Signal::Buy)]);

    assert_eq!(dashboard.indicators.len(), 2);
    assert!(dashboard.indicators.iter().all(|r| r.ema_bullish && r.macd_bullish));

    let bias: Vec<(&str, Bias)> = dashboard
        .bias
        .iter()
        .map(|r| (r.symbol.as_str(), r.bias))
        .collect();
    assert_eq!(bias, vec![("TCS", Bias::BuySide), ("INFY", Bias::SellSide)]);
}

#[tokio::test]
async fn test_cycle_updates_metrics() {
    let provider = Arc::new(ScriptedProvider::new());
    provider.push("TCS.NS", LIVE, Scripted::Candles(uptrend_candles()));
    let metrics = Arc::new(Metrics::new().unwrap());
    let config = DashboardConfig {
        watchlist: vec!["TCS.NS".to_string()],
        ..DashboardConfig::default()
    };
    let mut runtime = build_runtime_with(
        config,
        provider,
        Arc::new(RecordingSink::default()),
        Some(metrics.clone()),
    );

    runtime.tick().await;

    assert_eq!(metrics.refresh_cycles_total.get(), 1);
    assert_eq!(metrics.symbols_evaluated_total.get(), 1);
    assert_eq!(
        metrics
            .symbols_skipped_total
            .with_label_values(&["no_data"])
            .get(),
        1
    );
    assert_eq!(metrics.alerts_sent_total.get(), 1);
    assert_eq!(metrics.live_rows.get(), 1);
}
