use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Request-boundary errors. Every variant is recovered into a structured
/// `{"message"}` body; none are fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file was attached to the upload.")]
    MissingFile,

    #[error("Unsupported file type: {0}. Only JPEG and PNG images are accepted.")]
    InvalidMimeType(String),

    #[error("File exceeds 3 MB limit.")]
    FileTooLarge,

    #[error("No image found with id {0}.")]
    NotFound(Uuid),

    #[error("Could not read the upload request: {0}")]
    Multipart(#[from] MultipartError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFile
            | ApiError::InvalidMimeType(_)
            | ApiError::FileTooLarge
            | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "message": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
