use crate::client::picker::UploadCandidate;
use crate::server::types::{DeleteResponse, ErrorBody};
use crate::store::record::ImageRecord;
use crate::utils::constants::{DEFAULT_PORT, UPLOAD_CHUNK_BYTES, UPLOAD_FIELD};
use bytes::Bytes;
use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status; `message` carries the
    /// server-supplied text when the body was parseable.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Network-level failure with no server response.
    #[error("network failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body was not the expected JSON.
    #[error("could not parse server response: {0}")]
    MalformedResponse(reqwest::Error),

    #[error("invalid API base url: {0}")]
    BadBase(#[from] url::ParseError),
}

/// HTTP transport for the gallery API. One instance per origin; cheap to
/// clone.
#[derive(Debug, Clone)]
pub struct GalleryApi {
    http: reqwest::Client,
    base: Url,
}

impl GalleryApi {
    /// `base` must be an origin, e.g. `http://localhost:4000`.
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Resolves the API origin from `GALLERY_API_URL`, defaulting to the
    /// local development server.
    pub fn from_env() -> Result<Self, ClientError> {
        let raw = std::env::var("GALLERY_API_URL")
            .unwrap_or_else(|_| format!("http://localhost:{DEFAULT_PORT}"));
        Ok(Self::new(Url::parse(&raw)?))
    }

    pub async fn list(&self) -> Result<Vec<ImageRecord>, ClientError> {
        let response = self.http.get(self.endpoint("images")?).send().await?;
        Self::parse(response).await
    }

    /// Uploads one file as a multipart form. The body streams in 64 KB
    /// chunks; as the transport pulls each chunk, the cumulative percentage
    /// (0-100) is pushed into `progress`. The returned future resolves to
    /// the single outcome; progress only ever flows through the channel.
    pub async fn upload(
        &self,
        candidate: &UploadCandidate,
        progress: UnboundedSender<u8>,
    ) -> Result<ImageRecord, ClientError> {
        let total = candidate.bytes.len();
        let chunks: Vec<Bytes> = candidate
            .bytes
            .chunks(UPLOAD_CHUNK_BYTES)
            .map(Bytes::copy_from_slice)
            .collect();

        let mut sent = 0usize;
        let counted = futures::stream::iter(chunks).map(move |chunk| {
            sent += chunk.len();
            let pct = if total == 0 {
                100
            } else {
                (sent as u64 * 100 / total as u64) as u8
            };
            // The receiver may be gone if nobody watches progress; uploads
            // still proceed.
            let _ = progress.send(pct);
            Ok::<Bytes, std::io::Error>(chunk)
        });

        let part = Part::stream_with_length(reqwest::Body::wrap_stream(counted), total as u64)
            .file_name(candidate.filename.clone())
            .mime_str(&candidate.mimetype)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(self.endpoint("upload")?)
            .multipart(form)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Deletes by id, returning the removed id the server confirmed.
    pub async fn delete(&self, id: Uuid) -> Result<Uuid, ClientError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("images/{id}"))?)
            .send()
            .await?;
        let deleted: DeleteResponse = Self::parse(response).await?;
        Ok(deleted.id)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(ClientError::MalformedResponse)
        } else {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("request failed with status {}", status.as_u16()),
            };
            Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}
