//! Plain-text rendering of the three dashboard tables.

use chrono::Local;

use crate::models::dashboard::{BiasRow, DashboardSnapshot, EmaTrend, IndicatorStatusRow, LiveRow};

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(headers.iter().map(|h| h.to_string()).collect())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.into_iter().map(format_row));
    lines.join("\n")
}

pub fn render_live(rows: &[LiveRow]) -> String {
    table(
        &["Symbol", "Last Price", "RSI", "Signal", "Time"],
        rows.iter()
            .map(|r| {
                vec![
                    r.symbol.clone(),
                    format!("{:.2}", r.last_price),
                    format!("{:.2}", r.rsi),
                    r.signal.to_string(),
                    r.evaluated_at.with_timezone(&Local).format("%H:%M:%S").to_string(),
                ]
            })
            .collect(),
    )
}

pub fn render_indicators(rows: &[IndicatorStatusRow]) -> String {
    table(
        &["Symbol", "EMA", "MACD", "RSI", "Signal"],
        rows.iter()
            .map(|r| {
                vec![
                    r.symbol.clone(),
                    r.ema_label().to_string(),
                    r.macd_label().to_string(),
                    r.rsi_label(),
                    r.signal.to_string(),
                ]
            })
            .collect(),
    )
}

pub fn render_bias(rows: &[BiasRow]) -> String {
    table(
        &["Symbol", "EMA Trend", "RSI", "Tomorrow Bias"],
        rows.iter()
            .map(|r| {
                let trend = match r.ema_trend {
                    EmaTrend::Above => "Above",
                    EmaTrend::Below => "Below",
                };
                vec![
                    r.symbol.clone(),
                    trend.to_string(),
                    format!("{:.1}", r.rsi),
                    r.bias.to_string(),
                ]
            })
            .collect(),
    )
}

/// All three sections, with a notice in place of an empty live table.
pub fn render_dashboard(snapshot: &DashboardSnapshot) -> String {
    let live = if snapshot.live.is_empty() {
        "No data fetched. Try again later.".to_string()
    } else {
        render_live(&snapshot.live)
    };

    let mut out = format!(
        "Live Intraday Signals\n{}\n\nIndicator Status (RSI, EMA, MACD)\n{}\n\nAfter Market Analysis (Tomorrow Setup)\n{}\n",
        live,
        render_indicators(&snapshot.indicators),
        render_bias(&snapshot.bias)
    );
    if let Some(updated_at) = snapshot.updated_at {
        out.push_str(&format!(
            "\nLast updated: {}\n",
            updated_at.with_timezone(&Local).format("%H:%M:%S")
        ));
    }
    out
}
