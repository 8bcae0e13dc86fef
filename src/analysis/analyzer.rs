use super::types::{Direction, TradingSignal};
use crate::{Result, ingest::ValidatedAnalysis};
use async_trait::async_trait;
use tracing::debug;

/// Turns a validated chart pair into a trade proposal.
#[async_trait]
pub trait SignalAnalyzer: Send + Sync {
    async fn analyze(&self, input: &ValidatedAnalysis) -> Result<TradingSignal>;
}

const PLACEHOLDER_REASONING: &str =
    "HTF bias bullish via BOS; LTF shows sweep -> MSS -> FVG. Entry at OTE discount; RR ~ 2.2.";

/// Returns the same long signal for every request. Chart content is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl PlaceholderAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn signal() -> TradingSignal {
        TradingSignal::new(Direction::Long, 1.2345, 1.2320, 1.2400, PLACEHOLDER_REASONING)
    }
}

#[async_trait]
impl SignalAnalyzer for PlaceholderAnalyzer {
    async fn analyze(&self, input: &ValidatedAnalysis) -> Result<TradingSignal> {
        debug!(
            "Placeholder analysis for symbol {:?}: htf {}x{}, ltf {}x{}",
            input.symbol,
            input.htf.width(),
            input.htf.height(),
            input.ltf.width(),
            input.ltf.height()
        );
        Ok(Self::signal())
    }
}
