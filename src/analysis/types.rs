use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => f.write_str("long"),
            Self::Short => f.write_str("short"),
        }
    }
}

/// A proposed trade as returned by `/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub direction: Direction,
    pub entry: f64,
    pub stop: f64,
    pub target: f64,
    pub reasoning: String,
}

impl TradingSignal {
    pub fn new(
        direction: Direction,
        entry: f64,
        stop: f64,
        target: f64,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            entry,
            stop,
            target,
            reasoning: reasoning.into(),
        }
    }

    /// Reward over risk, measured from entry.
    pub fn risk_reward(&self) -> Option<f64> {
        let risk = (self.entry - self.stop).abs();
        if risk == 0.0 {
            return None;
        }
        Some((self.target - self.entry).abs() / risk)
    }
}
