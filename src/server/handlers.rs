use crate::server::error::ApiError;
use crate::server::types::{AppState, DeleteResponse};
use crate::server::validate::validate_upload;
use crate::store::record::ImageRecord;
use crate::utils::constants::UPLOAD_FIELD;
use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn health_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn list_images_handler(State(state): State<Arc<AppState>>) -> Json<Vec<ImageRecord>> {
    let store = state.store.lock().await;
    Json(store.list())
}

/// Accepts a multipart form with exactly one file under the `image` field,
/// validates it, and inserts the record at the front of the store.
pub async fn upload_image_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ImageRecord>), ApiError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "untitled".to_string());
        let mimetype = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        upload = Some((filename, mimetype, bytes));
        break;
    }

    let (filename, mimetype, bytes) = upload.ok_or(ApiError::MissingFile)?;
    let mimetype = validate_upload(mimetype.as_deref(), bytes.len())?;

    let record = ImageRecord::new(filename, mimetype, &bytes);
    info!(
        id = %record.id,
        size = record.size,
        mimetype = %record.mimetype,
        "stored image {}",
        record.filename
    );

    let mut store = state.store.lock().await;
    store.insert_front(record.clone());

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn delete_image_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let mut store = state.store.lock().await;
    let removed = store.remove_by_id(&id).ok_or(ApiError::NotFound(id))?;

    info!(id = %removed.id, "deleted image {}", removed.filename);
    Ok(Json(DeleteResponse { id: removed.id }))
}
