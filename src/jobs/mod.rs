//! Per-symbol pipeline: fetch → indicators → classification → alert.

pub mod context;
pub mod handlers;
pub mod types;

pub use context::JobContext;
pub use handlers::{handle_bias_symbol, handle_live_symbol, run_refresh_cycle};
pub use types::{CycleReport, LiveEvaluation, SymbolError, SymbolOutcome};
