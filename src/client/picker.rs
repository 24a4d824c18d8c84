use crate::utils::constants::{ALLOWED_MIME_TYPES, MAX_IMAGE_BYTES};
use std::ffi::OsStr;
use std::path::Path;
use thiserror::Error;

/// A file the user picked for upload, held in memory together with the
/// metadata the server validates against.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub filename: String,
    pub mimetype: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum PickError {
    #[error("No file selected.")]
    NothingSelected,

    #[error("Unsupported file type: {0}. Pick a JPEG or PNG image.")]
    UnsupportedType(String),

    #[error("File is larger than the 3 MB upload limit.")]
    TooLarge(u64),

    #[error("Could not read the file: {0}")]
    Unreadable(#[from] std::io::Error),
}

impl UploadCandidate {
    pub fn new(filename: String, mimetype: String, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            mimetype,
            bytes,
        }
    }

    /// Reads a file from disk, resolving the MIME type from its extension.
    pub async fn from_path(path: &Path) -> Result<Self, PickError> {
        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("untitled")
            .to_string();
        let mimetype = mime_for(&filename)
            .ok_or_else(|| PickError::UnsupportedType(extension_of(&filename)))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;

        Ok(Self {
            filename,
            mimetype,
            bytes,
        })
    }
}

/// Client-side mirror of the server's upload contract; failing here means no
/// network call is made.
pub fn validate_candidate(candidate: &UploadCandidate) -> Result<(), PickError> {
    if !ALLOWED_MIME_TYPES.contains(&candidate.mimetype.as_str()) {
        return Err(PickError::UnsupportedType(candidate.mimetype.clone()));
    }
    if candidate.bytes.len() > MAX_IMAGE_BYTES {
        return Err(PickError::TooLarge(candidate.bytes.len() as u64));
    }
    Ok(())
}

fn mime_for(filename: &str) -> Option<&'static str> {
    let ext = extension_of(filename).to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

fn extension_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_string())
        .unwrap_or_else(|| filename.to_string())
}
