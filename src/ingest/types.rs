use axum::body::Bytes;
use image::RgbImage;
use std::fmt;
use thiserror::Error;

/// The two chart slots an analysis request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    HighTimeframe,
    LowTimeframe,
}

impl ImageRole {
    /// Multipart form field name for this role.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::HighTimeframe => "htf",
            Self::LowTimeframe => "ltf",
        }
    }
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One file part as received, before any checks.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedImage {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn has_image_content_type(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub htf: UploadedImage,
    pub ltf: UploadedImage,
    pub symbol: Option<String>,
}

impl AnalysisRequest {
    pub fn new(htf: UploadedImage, ltf: UploadedImage, symbol: Option<String>) -> Self {
        Self { htf, ltf, symbol }
    }

    pub(crate) fn images(&self) -> [(ImageRole, &UploadedImage); 2] {
        [
            (ImageRole::HighTimeframe, &self.htf),
            (ImageRole::LowTimeframe, &self.ltf),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct ValidatedImage {
    pub role: ImageRole,
    pub filename: String,
    pub image: RgbImage,
}

impl ValidatedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Both charts decoded to RGB, plus the untouched symbol label.
#[derive(Debug, Clone)]
pub struct ValidatedAnalysis {
    pub htf: ValidatedImage,
    pub ltf: ValidatedImage,
    pub symbol: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid file type: {filename}")]
    InvalidContentType { filename: String },

    #[error("Failed to parse images: {reason}")]
    DecodeFailure { filename: String, reason: String },
}

impl ValidationError {
    pub fn filename(&self) -> &str {
        match self {
            Self::InvalidContentType { filename } | Self::DecodeFailure { filename, .. } => {
                filename
            }
        }
    }
}
