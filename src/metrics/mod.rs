//! Prometheus metrics for refresh cycles, alerts and the HTTP surface.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub refresh_cycles_total: IntCounter,
    pub refresh_cycle_duration_seconds: Histogram,
    pub symbols_evaluated_total: IntCounter,
    pub symbols_skipped_total: IntCounterVec,
    pub alerts_sent_total: IntCounter,
    pub alerts_failed_total: IntCounter,
    pub live_rows: IntGauge,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let refresh_cycles_total =
            IntCounter::new("refresh_cycles_total", "Completed dashboard refresh cycles")?;
        let refresh_cycle_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "refresh_cycle_duration_seconds",
                "Wall time of one refresh cycle",
            )
            .buckets(vec![0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        )?;
        let symbols_evaluated_total = IntCounter::new(
            "symbols_evaluated_total",
            "Symbols that produced a dashboard row",
        )?;
        let symbols_skipped_total = IntCounterVec::new(
            Opts::new("symbols_skipped_total", "Symbols skipped for a cycle"),
            &["reason"],
        )?;
        let alerts_sent_total = IntCounter::new("alerts_sent_total", "Signal alerts delivered")?;
        let alerts_failed_total =
            IntCounter::new("alerts_failed_total", "Signal alerts that failed to deliver")?;
        let live_rows = IntGauge::new("live_rows", "Rows in the latest live signal table")?;
        let http_requests_total = IntCounter::new("http_requests_total", "HTTP requests served")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests being served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency",
        ))?;

        registry.register(Box::new(refresh_cycles_total.clone()))?;
        registry.register(Box::new(refresh_cycle_duration_seconds.clone()))?;
        registry.register(Box::new(symbols_evaluated_total.clone()))?;
        registry.register(Box::new(symbols_skipped_total.clone()))?;
        registry.register(Box::new(alerts_sent_total.clone()))?;
        registry.register(Box::new(alerts_failed_total.clone()))?;
        registry.register(Box::new(live_rows.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            refresh_cycles_total,
            refresh_cycle_duration_seconds,
            symbols_evaluated_total,
            symbols_skipped_total,
            alerts_sent_total,
            alerts_failed_total,
            live_rows,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
        })
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
