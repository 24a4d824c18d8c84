use std::time::Duration;

/// Hard cap on a stored image: 3 MB exactly.
pub const MAX_IMAGE_BYTES: usize = 3 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Multipart field name the upload handler expects the file under.
pub const UPLOAD_FIELD: &str = "image";

/// Transport-level body cap. Kept well above MAX_IMAGE_BYTES so an oversized
/// upload still reaches the validator and gets a 400 instead of a dropped
/// connection.
pub const SERVER_REQUEST_BODY_LIMIT: usize = 10 * 1024 * 1024;

pub const DEFAULT_PORT: u16 = 4000;

/// Chunk size for the client's streamed upload body.
pub const UPLOAD_CHUNK_BYTES: usize = 64 * 1024;

/// How long a transient notice stays visible before auto-dismissing.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);
