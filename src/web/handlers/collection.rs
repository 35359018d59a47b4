//! Collection view handlers.

use axum::{extract::State, response::Html, Json};
use std::sync::Arc;

use super::{render_view, AppState};
use crate::storage::Gallery;
use crate::web::dto::ApiResponse;
use crate::web::error::ApiError;
use crate::web::pages;
use crate::web::view::View;

/// Scan every category and render the gallery sections.
pub(super) fn collection_body(state: &AppState) -> Result<String, ApiError> {
    let gallery = state.uploads.gallery()?;
    tracing::debug!(assets = gallery.len(), "Scanned upload root");
    Ok(pages::collection_body(&gallery))
}

/// GET /collection - Show every stored asset.
pub async fn collection_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    render_view(&state, View::Collection, None)
}

/// GET /api/collection - List every stored asset as JSON.
pub async fn collection_json(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Gallery>>, ApiError> {
    let gallery = state.uploads.gallery()?;
    Ok(Json(ApiResponse::new(gallery)))
}
