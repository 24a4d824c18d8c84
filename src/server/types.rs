use crate::store::ImageStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Shared application state. The store lock makes list/insert/remove atomic
/// with respect to concurrent requests on the multi-threaded runtime.
pub struct AppState {
    pub store: Mutex<ImageStore>,
    /// Built client directory, set only when serving in production mode.
    pub client_dist: Option<PathBuf>,
}

impl AppState {
    pub fn new(client_dist: Option<PathBuf>) -> Self {
        Self {
            store: Mutex::new(ImageStore::new()),
            client_dist,
        }
    }
}

/// Body of a successful DELETE: the id of the removed record.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: Uuid,
}

/// 4xx error body shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
