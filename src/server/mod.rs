pub mod error;
pub mod handlers;
pub mod static_assets;
pub mod types;
pub mod validate;

use crate::server::handlers::{
    delete_image_handler, health_handler, list_images_handler, upload_image_handler,
};
use crate::server::types::AppState;
use crate::utils::constants::SERVER_REQUEST_BODY_LIMIT;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let timeout = TimeoutLayer::new(Duration::from_secs(300));

    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/images", get(list_images_handler))
        .route("/images/{id}", delete(delete_image_handler))
        .route("/upload", post(upload_image_handler));

    if let Some(dist) = state.client_dist.clone() {
        router = router.nest_service("/assets", ServeDir::new(dist.join("assets")));
    }

    router
        .fallback(static_assets::spa_fallback)
        .layer(timeout)
        .layer(cors)
        .layer(DefaultBodyLimit::max(SERVER_REQUEST_BODY_LIMIT))
        .layer(RequestBodyLimitLayer::new(SERVER_REQUEST_BODY_LIMIT))
        .with_state(state)
}
