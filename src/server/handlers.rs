use super::{extract::read_analysis_request, types::HealthResponse};
use crate::{
    Error, Result,
    analysis::{SignalAnalyzer, TradingSignal},
    ingest,
};
use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn SignalAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn SignalAnalyzer>) -> Self {
        Self { analyzer }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

pub async fn analyze(
    State(state): State<AppState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<TradingSignal>> {
    let request = read_analysis_request(multipart?).await?;

    info!(
        "Received analysis request for symbol {:?} (htf: '{}', ltf: '{}')",
        request.symbol, request.htf.filename, request.ltf.filename
    );

    // Decoding is CPU-bound; keep it off the async workers.
    let validated = tokio::task::spawn_blocking(move || ingest::validate(request))
        .await
        .map_err(|e| Error::internal(format!("Image validation task failed: {}", e)))??;

    let signal = state.analyzer.analyze(&validated).await?;

    info!(
        "Returning {} signal for symbol {:?}",
        signal.direction, validated.symbol
    );

    Ok(Json(signal))
}
