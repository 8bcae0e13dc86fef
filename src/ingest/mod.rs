mod types;
mod validate;

pub use types::{
    AnalysisRequest, ImageRole, UploadedImage, ValidatedAnalysis, ValidatedImage, ValidationError,
};
pub use validate::{decode_image, validate};
