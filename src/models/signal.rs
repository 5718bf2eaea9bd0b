use serde::{Deserialize, Serialize};
use std::fmt;

/// Live trading signal derived from the latest indicator snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Whether a transition into this signal is worth an alert.
    pub fn is_actionable(self) -> bool {
        matches!(self, Signal::Buy | Signal::Sell)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarser next-session direction computed from daily bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bias {
    BuySide,
    SellSide,
    Neutral,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bias::BuySide => "Buy Side",
            Bias::SellSide => "Sell Side",
            Bias::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}
