mod analyzer;
mod types;

pub use analyzer::{PlaceholderAnalyzer, SignalAnalyzer};
pub use types::{Direction, TradingSignal};
