use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use ict_signal_engine::{
    analysis::{PlaceholderAnalyzer, SignalAnalyzer},
    config::ServerConfig,
    server::{self, AppState},
};
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::Value;
use std::{io::Cursor, sync::Arc};
use tower::ServiceExt;

pub const BOUNDARY: &str = "ict-engine-test-boundary";

/// Encode a small solid-colour chart in the given format
pub fn encode_image(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([30, 144, 255]));
    let mut data = Vec::new();
    img.write_to(&mut Cursor::new(&mut data), format)
        .expect("Failed to encode test image");
    data
}

pub fn png_bytes() -> Vec<u8> {
    encode_image(ImageFormat::Png, 10, 10)
}

pub fn jpeg_bytes() -> Vec<u8> {
    encode_image(ImageFormat::Jpeg, 10, 10)
}

/// Hand-built multipart/form-data body
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(
        mut self,
        name: &str,
        filename: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Self {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        if let Some(content_type) = content_type {
            self.body
                .extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        self.body.extend_from_slice(b"\r\n");
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }

    pub fn into_request(self, uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.build()))
            .unwrap()
    }
}

/// A form carrying a valid PNG as `htf` and a valid JPEG as `ltf`
pub fn valid_form() -> MultipartBody {
    MultipartBody::new()
        .file("htf", "htf.png", Some("image/png"), &png_bytes())
        .file("ltf", "ltf.jpg", Some("image/jpeg"), &jpeg_bytes())
}

pub fn create_test_app() -> Router {
    create_test_app_with(Arc::new(PlaceholderAnalyzer::new()), ServerConfig::default())
}

pub fn create_test_app_with(analyzer: Arc<dyn SignalAnalyzer>, config: ServerConfig) -> Router {
    server::router(AppState::new(analyzer), &config).expect("Failed to build router")
}

/// Split a response into its status and parsed JSON body
pub async fn json_body(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).expect("Response body is not JSON");
    (status, value)
}

/// POST a form to `/analyze` and return status plus JSON body
pub async fn post_form(app: Router, form: MultipartBody) -> (StatusCode, Value) {
    let response = app.oneshot(form.into_request("/analyze")).await.unwrap();
    json_body(response).await
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"
  cors:
    allowed_origins:
      - "http://localhost:5173"
  uploads:
    max_body_bytes: 1048576
"#;
