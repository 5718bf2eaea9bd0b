//! Shared data models spanning the engine layers.

pub mod dashboard;
pub mod indicators;
pub mod signal;

pub use dashboard::{BiasRow, DashboardSnapshot, EmaTrend, IndicatorStatusRow, LiveRow, RsiZone};
pub use indicators::{Candle, IndicatorSeries, IndicatorSnapshot};
pub use signal::{Bias, Signal};
