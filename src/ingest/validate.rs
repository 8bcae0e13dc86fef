use super::types::{
    AnalysisRequest, ImageRole, UploadedImage, ValidatedAnalysis, ValidatedImage, ValidationError,
};
use image::ImageReader;
use std::io::Cursor;
use tracing::debug;

/// Runs both gates over a request.
///
/// The content-type gate covers both uploads before anything is decoded, so a
/// mislabelled file is reported even when its partner is corrupt. Any failure
/// rejects the whole request.
pub fn validate(request: AnalysisRequest) -> Result<ValidatedAnalysis, ValidationError> {
    for (role, upload) in request.images() {
        if !upload.has_image_content_type() {
            debug!(
                "Rejecting {} upload '{}' with content type '{}'",
                role, upload.filename, upload.content_type
            );
            return Err(ValidationError::InvalidContentType {
                filename: upload.filename.clone(),
            });
        }
    }

    let htf = decode_image(ImageRole::HighTimeframe, &request.htf)?;
    let ltf = decode_image(ImageRole::LowTimeframe, &request.ltf)?;

    Ok(ValidatedAnalysis {
        htf,
        ltf,
        symbol: request.symbol,
    })
}

/// Decodes an upload and converts it to 8-bit RGB.
///
/// The format is sniffed from the bytes; the declared content type only
/// matters to the content-type gate.
pub fn decode_image(
    role: ImageRole,
    upload: &UploadedImage,
) -> Result<ValidatedImage, ValidationError> {
    let reader = ImageReader::new(Cursor::new(&upload.bytes[..]))
        .with_guessed_format()
        .map_err(|e| decode_failure(upload, e))?;

    let image = reader.decode().map_err(|e| decode_failure(upload, e))?;

    debug!(
        "Decoded {} upload '{}' ({}x{})",
        role,
        upload.filename,
        image.width(),
        image.height()
    );

    Ok(ValidatedImage {
        role,
        filename: upload.filename.clone(),
        image: image.into_rgb8(),
    })
}

fn decode_failure(upload: &UploadedImage, reason: impl ToString) -> ValidationError {
    ValidationError::DecodeFailure {
        filename: upload.filename.clone(),
        reason: reason.to_string(),
    }
}
