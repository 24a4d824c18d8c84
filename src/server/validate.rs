use crate::server::error::ApiError;
use crate::utils::constants::{ALLOWED_MIME_TYPES, MAX_IMAGE_BYTES};

/// Checks one uploaded file against the gallery's contract. The declared
/// MIME type is trusted as-is; there is no content sniffing. Returns the
/// accepted type in owned form.
pub fn validate_upload(mimetype: Option<&str>, size: usize) -> Result<String, ApiError> {
    let mimetype = mimetype.unwrap_or("application/octet-stream");

    if !ALLOWED_MIME_TYPES.contains(&mimetype) {
        return Err(ApiError::InvalidMimeType(mimetype.to_string()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ApiError::FileTooLarge);
    }

    Ok(mimetype.to_string())
}
