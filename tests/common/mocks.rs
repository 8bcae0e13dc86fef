use async_trait::async_trait;
use ict_signal_engine::{
    Error, Result,
    analysis::{Direction, SignalAnalyzer, TradingSignal},
    ingest::ValidatedAnalysis,
};
use std::sync::{Arc, Mutex};

/// What the analyzer saw for one call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub symbol: Option<String>,
    pub htf_filename: String,
    pub ltf_filename: String,
    pub htf_size: (u32, u32),
    pub ltf_size: (u32, u32),
}

/// Mock analyzer that records its inputs
#[derive(Debug, Clone)]
pub struct RecordingAnalyzer {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub signal: TradingSignal,
    pub error: Option<String>,
}

impl RecordingAnalyzer {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            signal: TradingSignal::new(Direction::Short, 1.1000, 1.1050, 1.0900, "mock signal"),
            error: None,
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for RecordingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignalAnalyzer for RecordingAnalyzer {
    async fn analyze(&self, input: &ValidatedAnalysis) -> Result<TradingSignal> {
        self.calls.lock().unwrap().push(RecordedCall {
            symbol: input.symbol.clone(),
            htf_filename: input.htf.filename.clone(),
            ltf_filename: input.ltf.filename.clone(),
            htf_size: (input.htf.width(), input.htf.height()),
            ltf_size: (input.ltf.width(), input.ltf.height()),
        });

        if let Some(ref error) = self.error {
            return Err(Error::internal(error.clone()));
        }

        Ok(self.signal.clone())
    }
}
