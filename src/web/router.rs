//! Router configuration.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::WebConfig;

use super::handlers::{
    collection_json, collection_page, home_page, submit_story, upload_file, upload_file_json,
    upload_page, AppState,
};
use super::middleware::{create_cors_layer, media_filter, security_headers};

/// Create the main router.
pub fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let view_routes = Router::new()
        .route("/", get(home_page))
        .route("/home", get(home_page))
        .route("/upload", get(upload_page))
        .route("/collection", get(collection_page))
        .route("/upload/:category", post(upload_file))
        .route("/stories", post(submit_story));

    let api_routes = Router::new()
        .route("/collection", get(collection_json))
        .route("/upload/:category", post(upload_file_json));

    let media = Router::new()
        .nest_service("/media", ServeDir::new(app_state.uploads.path()))
        .layer(middleware::from_fn(media_filter));

    Router::new()
        .merge(view_routes)
        .nest("/api", api_routes)
        .merge(media)
        .merge(create_health_router())
        .layer(body_limit(config.max_upload_size_mb))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&config.cors_origins))
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}

/// Request body limit for uploads (0 = unlimited).
fn body_limit(max_upload_size_mb: u64) -> DefaultBodyLimit {
    if max_upload_size_mb == 0 {
        DefaultBodyLimit::disable()
    } else {
        let bytes = max_upload_size_mb.saturating_mul(1024 * 1024);
        DefaultBodyLimit::max(usize::try_from(bytes).unwrap_or(usize::MAX))
    }
}

/// Create a health check router.
pub fn create_health_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
