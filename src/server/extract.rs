use crate::{
    Error, Result,
    ingest::{AnalysisRequest, ImageRole, UploadedImage},
};
use axum::extract::{Multipart, multipart::Field};
use tracing::debug;

/// Collects the `htf`/`ltf` files and the optional `symbol` text from a
/// multipart body. Unknown fields are skipped and a repeated field keeps its
/// last value. Nothing here looks at the image bytes.
pub async fn read_analysis_request(mut multipart: Multipart) -> Result<AnalysisRequest> {
    let mut htf = None;
    let mut ltf = None;
    let mut symbol = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            debug!("Skipping unnamed multipart field");
            continue;
        };

        match name.as_str() {
            "htf" => htf = Some(read_upload(field).await?),
            "ltf" => ltf = Some(read_upload(field).await?),
            "symbol" => {
                let text = field.text().await?;
                symbol = (!text.is_empty()).then_some(text);
            }
            other => debug!("Ignoring unknown form field '{}'", other),
        }
    }

    let htf = htf.ok_or_else(|| Error::missing_field(ImageRole::HighTimeframe.field_name()))?;
    let ltf = ltf.ok_or_else(|| Error::missing_field(ImageRole::LowTimeframe.field_name()))?;

    Ok(AnalysisRequest::new(htf, ltf, symbol))
}

async fn read_upload(field: Field<'_>) -> Result<UploadedImage> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content_type = field.content_type().unwrap_or_default().to_string();
    let bytes = field.bytes().await?;

    debug!(
        "Read upload '{}' ({}, {} bytes)",
        filename,
        content_type,
        bytes.len()
    );

    Ok(UploadedImage::new(filename, content_type, bytes))
}
