use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored image. Immutable once created; the wire form is camelCase and
/// carries the full image bytes as base64 text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub id: Uuid,
    pub filename: String,
    pub mimetype: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub data: String,
}

impl ImageRecord {
    /// Builds a record from an already-validated upload: fresh id, current
    /// timestamp, bytes encoded as base64.
    pub fn new(filename: String, mimetype: String, bytes: &[u8]) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            mimetype,
            size: bytes.len() as u64,
            uploaded_at: Utc::now(),
            data: BASE64.encode(bytes),
        }
    }

    pub fn decode_data(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_round_trips_through_base64() {
        let bytes: Vec<u8> = (0..1024u32).map(|i| (i % 251) as u8).collect();
        let record = ImageRecord::new("a.png".to_string(), "image/png".to_string(), &bytes);

        assert_eq!(record.size, 1024);
        assert_eq!(record.decode_data().unwrap(), bytes);
    }

    #[test]
    fn wire_form_is_camel_case() {
        let record = ImageRecord::new("a.png".to_string(), "image/png".to_string(), &[1, 2, 3]);
        let json = serde_json::to_value(&record).unwrap();

        assert!(json.get("uploadedAt").is_some());
        assert!(json.get("uploaded_at").is_none());
        assert_eq!(json["mimetype"], "image/png");
        assert_eq!(json["size"], 3);
    }

    #[test]
    fn ids_are_unique() {
        let a = ImageRecord::new("a.png".to_string(), "image/png".to_string(), &[]);
        let b = ImageRecord::new("a.png".to_string(), "image/png".to_string(), &[]);
        assert_ne!(a.id, b.id);
    }
}
