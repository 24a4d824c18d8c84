use crate::client::api::{ClientError, GalleryApi};
use crate::client::notice::{Notice, NoticeBoard};
use crate::client::picker::{PickError, UploadCandidate, validate_candidate};
use crate::store::record::ImageRecord;
use crate::utils::constants::NOTICE_TTL;
use std::path::Path;
use tokio::sync::mpsc;
use tracing::warn;
use uuid::Uuid;

/// Local mirror of the gallery plus the ephemeral flags the view layer
/// renders from. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct ViewState {
    pub records: Vec<ImageRecord>,
    pub loading: bool,
    pub uploading: bool,
    /// 0-100 while an upload is in flight, reset to 0 afterwards.
    pub progress: u8,
    /// Whether any fetch has ever succeeded; decides what a failed refresh
    /// leaves behind.
    pub loaded_once: bool,
}

/// Drives the gallery client: pick -> validate -> upload-with-progress ->
/// reconcile, plus delete and refresh. At most one upload is in flight at a
/// time.
pub struct GalleryController {
    api: GalleryApi,
    pub view: ViewState,
    pub notices: NoticeBoard,
}

impl GalleryController {
    pub fn new(api: GalleryApi) -> Self {
        Self {
            api,
            view: ViewState::default(),
            notices: NoticeBoard::new(NOTICE_TTL),
        }
    }

    /// Initial load and explicit refresh: replaces the local view wholesale.
    /// A failure keeps whatever was shown before (nothing, if no fetch ever
    /// succeeded) behind a sticky error notice.
    pub async fn refresh(&mut self) {
        self.view.loading = true;
        match self.api.list().await {
            Ok(records) => {
                self.view.records = records;
                self.view.loaded_once = true;
                self.notices.clear();
            }
            Err(err) => {
                warn!("failed to fetch gallery: {err}");
                self.notices
                    .show_sticky(Notice::error(format!("Could not load the gallery: {err}")));
            }
        }
        self.view.loading = false;
    }

    /// Picks a file from disk and runs the upload state machine on it.
    pub async fn upload_path(&mut self, path: &Path) {
        match UploadCandidate::from_path(path).await {
            Ok(candidate) => self.upload(Some(candidate)).await,
            Err(err) => self.notices.show(Notice::error(err.to_string())),
        }
    }

    /// The upload state machine: idle -> validating -> uploading ->
    /// (success | failure) -> idle. Client-side rejection happens before any
    /// network call; afterwards progress resets and the uploading flag
    /// clears so the same file can be re-picked.
    pub async fn upload(&mut self, picked: Option<UploadCandidate>) {
        if self.view.uploading {
            return;
        }

        let candidate = match picked {
            Some(candidate) => candidate,
            None => {
                self.notices
                    .show(Notice::error(PickError::NothingSelected.to_string()));
                return;
            }
        };
        if let Err(err) = validate_candidate(&candidate) {
            self.notices.show(Notice::error(err.to_string()));
            return;
        }

        self.view.uploading = true;
        self.view.progress = 0;

        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let fut = self.api.upload(&candidate, tx);
            tokio::pin!(fut);

            let outcome = loop {
                tokio::select! {
                    Some(pct) = rx.recv() => self.view.progress = pct,
                    res = &mut fut => break res,
                }
            };

            match outcome {
                Ok(record) => {
                    self.view.records.insert(0, record);
                    self.notices
                        .show(Notice::success(format!("Uploaded {}.", candidate.filename)));
                }
                Err(err) => {
                    warn!("upload of {} failed: {err}", candidate.filename);
                    self.notices.show(Notice::error(upload_failure_text(&err)));
                }
            }
        }

        self.view.progress = 0;
        self.view.uploading = false;
    }

    /// Deletes by id. The record leaves the local view only after the server
    /// confirms; failures leave the view untouched.
    pub async fn delete(&mut self, id: Uuid) {
        match self.api.delete(id).await {
            Ok(removed) => {
                self.view.records.retain(|r| r.id != removed);
                self.notices.show(Notice::success("Image deleted."));
            }
            Err(err) => {
                warn!("delete of {id} failed: {err}");
                self.notices.show(Notice::error(delete_failure_text(&err)));
            }
        }
    }
}

/// Prefers the server-supplied message, falling back to a generic one.
fn upload_failure_text(err: &ClientError) -> String {
    match err {
        ClientError::Rejected { message, .. } => message.clone(),
        _ => "Upload failed. Please try again.".to_string(),
    }
}

fn delete_failure_text(err: &ClientError) -> String {
    match err {
        ClientError::Rejected { message, .. } => message.clone(),
        _ => "Could not delete the image. Please try again.".to_string(),
    }
}
