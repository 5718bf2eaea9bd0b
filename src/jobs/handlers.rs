//! Handlers for the per-symbol refresh pipeline
//!
//! Every failure is confined to its symbol: the handler returns a
//! `SymbolError` and the cycle moves on to the next symbol.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::FetchWindow;
use crate::jobs::context::JobContext;
use crate::jobs::types::{CycleReport, LiveEvaluation, SymbolError, SymbolOutcome};
use crate::models::dashboard::{BiasRow, IndicatorStatusRow, LiveRow};
use crate::models::indicators::Candle;
use crate::notifications::SignalStore;
use crate::signals::SignalEngine;

async fn fetch_candles(
    ctx: &JobContext,
    symbol: &str,
    window: &FetchWindow,
) -> Result<Vec<Candle>, SymbolError> {
    let candles = ctx.data_provider.get_candles(symbol, window).await?;
    if candles.is_empty() {
        return Err(SymbolError::NoData);
    }
    Ok(candles)
}

/// Live signal for one symbol on the intraday window, followed by the
/// change-triggered alert.
pub async fn handle_live_symbol(
    ctx: &JobContext,
    state: &mut dyn SignalStore,
    symbol: &str,
) -> Result<LiveEvaluation, SymbolError> {
    let candles = fetch_candles(ctx, symbol, &ctx.config.live_window).await?;
    let (snapshot, signal) = SignalEngine::evaluate(&candles)?;

    debug!(
        symbol = %symbol,
        signal = %signal,
        close = snapshot.close,
        rsi = snapshot.rsi,
        "evaluated live signal for {}: {}",
        symbol,
        signal
    );

    let display = ctx.config.display_symbol(symbol);
    let live_row = LiveRow::new(display.clone(), &snapshot, signal, Utc::now());
    let indicator_row = IndicatorStatusRow::new(display, &snapshot, signal);
    let notification = ctx.notifier.notify(state, symbol, signal, snapshot.rsi).await;

    Ok(LiveEvaluation {
        snapshot,
        signal,
        live_row,
        indicator_row,
        notification,
    })
}

/// Next-session bias for one symbol on the daily window.
pub async fn handle_bias_symbol(ctx: &JobContext, symbol: &str) -> Result<BiasRow, SymbolError> {
    let candles = fetch_candles(ctx, symbol, &ctx.config.bias_window).await?;
    let (snapshot, bias) = SignalEngine::evaluate_bias(&candles)?;

    debug!(symbol = %symbol, bias = %bias, rsi = snapshot.rsi, "evaluated bias for {}", symbol);

    Ok(BiasRow::new(ctx.config.display_symbol(symbol), &snapshot, bias))
}

/// Run both passes over the watchlist, one symbol at a time.
pub async fn run_refresh_cycle(
    ctx: &JobContext,
    watchlist: &[String],
    state: &mut dyn SignalStore,
) -> CycleReport {
    let started_at = Utc::now();

    let mut live = Vec::with_capacity(watchlist.len());
    for symbol in watchlist {
        let result = handle_live_symbol(ctx, state, symbol).await;
        record_outcome(ctx, "live", symbol, result.as_ref().err());
        live.push(SymbolOutcome::new(symbol.as_str(), result));
    }

    let mut bias = Vec::with_capacity(watchlist.len());
    for symbol in watchlist {
        let result = handle_bias_symbol(ctx, symbol).await;
        record_outcome(ctx, "bias", symbol, result.as_ref().err());
        bias.push(SymbolOutcome::new(symbol.as_str(), result));
    }

    let report = CycleReport {
        live,
        bias,
        started_at,
        finished_at: Utc::now(),
    };

    info!(
        symbols = watchlist.len(),
        skipped = report.skipped(),
        alerts = report.alerts_triggered(),
        "refresh cycle finished"
    );

    report
}

fn record_outcome(ctx: &JobContext, pass: &'static str, symbol: &str, error: Option<&SymbolError>) {
    match error {
        None => {
            if let Some(ref metrics) = ctx.metrics {
                metrics.symbols_evaluated_total.inc();
            }
        }
        Some(e) => {
            match e {
                SymbolError::Fetch(_) => {
                    warn!(pass = pass, symbol = %symbol, error = %e, "skipping {}: {}", symbol, e)
                }
                SymbolError::NoData | SymbolError::InsufficientData(_) => {
                    info!(pass = pass, symbol = %symbol, error = %e, "skipping {}: {}", symbol, e)
                }
            }
            if let Some(ref metrics) = ctx.metrics {
                metrics
                    .symbols_skipped_total
                    .with_label_values(&[e.reason()])
                    .inc();
            }
        }
    }
}
