use crate::server::types::AppState;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::warn;

/// Paths that belong to the HTTP API. Unmatched requests under these stay
/// JSON 404s instead of falling through to the client markup.
const API_PREFIXES: [&str; 3] = ["/health", "/images", "/upload"];

fn is_api_path(path: &str) -> bool {
    API_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}

/// Catch-all for routes the API router did not match. In production mode,
/// unmatched GET routes get the client markup so client-side routing works;
/// API-shaped paths stay 404 and non-GET methods stay 405 either way.
pub async fn spa_fallback(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    if is_api_path(uri.path()) {
        return (
            StatusCode::NOT_FOUND,
            axum::Json(serde_json::json!({"message": "Not found."})),
        )
            .into_response();
    }
    if method != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let Some(dist) = state.client_dist.as_ref() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(dist.join("index.html")).await {
        Ok(markup) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            markup,
        )
            .into_response(),
        Err(err) => {
            warn!("could not read client markup from {}: {err}", dist.display());
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
