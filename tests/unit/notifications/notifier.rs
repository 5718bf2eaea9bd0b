//! Unit tests for change-triggered alerts

use std::sync::Arc;

use intradash::models::signal::Signal;
use intradash::notifications::{
    Alert, ChangeNotifier, InMemorySignalStore, NotifyError, NotifyOutcome, SignalStore,
};

use crate::fixtures::RecordingSink;

fn notifier() -> (ChangeNotifier, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    (ChangeNotifier::new(sink.clone()), sink)
}

#[tokio::test]
async fn test_first_actionable_signal_alerts() {
    let (notifier, sink) = notifier();
    let mut store = InMemorySignalStore::new();

    let outcome = notifier.notify(&mut store, "TCS.NS", Signal::Buy, 61.2).await;

    assert!(matches!(outcome, NotifyOutcome::Sent));
    assert_eq!(sink.alerts(), vec![Alert::new("TCS.NS", Signal::Buy, 61.2)]);
    assert_eq!(store.last_signal("TCS.NS"), Some(Signal::Buy));
}

#[tokio::test]
async fn test_buy_buy_sell_alerts_twice() {
    let (notifier, sink) = notifier();
    let mut store = InMemorySignalStore::new();

    let outcomes = [
        notifier.notify(&mut store, "TCS.NS", Signal::Buy, 60.0).await,
        notifier.notify(&mut store, "TCS.NS", Signal::Buy, 62.0).await,
        notifier.notify(&mut store, "TCS.NS", Signal::Sell, 41.0).await,
    ];

    let triggered: Vec<bool> = outcomes.iter().map(NotifyOutcome::is_triggered).collect();
    assert_eq!(triggered, vec![true, false, true]);

    let signals: Vec<Signal> = sink.alerts().iter().map(|a| a.signal).collect();
    assert_eq!(signals, vec![Signal::Buy, Signal::Sell]);
}

#[tokio::test]
async fn test_hold_never_alerts_or_records() {
    let (notifier, sink) = notifier();
    let mut store = InMemorySignalStore::new();

    let outcome = notifier.notify(&mut store, "INFY.NS", Signal::Hold, 50.0).await;

    assert!(!outcome.is_triggered());
    assert!(sink.alerts().is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_hold_does_not_reset_last_signal() {
    let (notifier, sink) = notifier();
    let mut store = InMemorySignalStore::new();

    notifier.notify(&mut store, "SBIN.NS", Signal::Buy, 58.0).await;
    notifier.notify(&mut store, "SBIN.NS", Signal::Hold, 66.0).await;
    let outcome = notifier.notify(&mut store, "SBIN.NS", Signal::Buy, 59.0).await;

    assert!(matches!(outcome, NotifyOutcome::Suppressed));
    assert_eq!(sink.alerts().len(), 1);
    assert_eq!(store.last_signal("SBIN.NS"), Some(Signal::Buy));
}

#[tokio::test]
async fn test_failed_delivery_keeps_state() {
    let sink = Arc::new(RecordingSink::failing());
    let notifier = ChangeNotifier::new(sink.clone());
    let mut store = InMemorySignalStore::new();

    let outcome = notifier.notify(&mut store, "TCS.NS", Signal::Sell, 35.0).await;
    assert!(matches!(
        outcome,
        NotifyOutcome::Failed(NotifyError::Rejected { status: 502, .. })
    ));
    assert_eq!(store.last_signal("TCS.NS"), Some(Signal::Sell));

    // Not retried on the next cycle.
    let outcome = notifier.notify(&mut store, "TCS.NS", Signal::Sell, 34.0).await;
    assert!(matches!(outcome, NotifyOutcome::Suppressed));
    assert_eq!(sink.alerts().len(), 1);
}

#[tokio::test]
async fn test_symbols_are_tracked_independently() {
    let (notifier, sink) = notifier();
    let mut store = InMemorySignalStore::new();

    notifier.notify(&mut store, "TCS.NS", Signal::Buy, 60.0).await;
    notifier.notify(&mut store, "INFY.NS", Signal::Buy, 60.0).await;
    notifier.notify(&mut store, "TCS.NS", Signal::Buy, 61.0).await;

    assert_eq!(sink.alerts().len(), 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_alert_message_format() {
    let alert = Alert::new("RELIANCE.NS", Signal::Buy, 42.36);
    assert_eq!(
        alert.message(),
        "🚨 RELIANCE.NS: BUY Signal triggered (RSI=42.4)"
    );

    let alert = Alert::new("TCS.NS", Signal::Sell, 71.0);
    assert_eq!(alert.message(), "🚨 TCS.NS: SELL Signal triggered (RSI=71.0)");
}
