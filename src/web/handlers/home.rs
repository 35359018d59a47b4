//! Home view handler.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use super::{render_view, AppState};
use crate::web::error::ApiError;
use crate::web::pages;
use crate::web::view::View;

/// Render the homepage document for the home view.
pub(super) fn home_body(state: &AppState) -> Result<String, ApiError> {
    let document = state.homepage.render().map_err(|e| {
        tracing::error!(
            document = %state.homepage.document().display(),
            "Failed to render homepage: {}",
            e
        );
        ApiError::internal("Failed to render homepage")
    })?;
    Ok(pages::home_body(&document, state.homepage.height()))
}

/// GET / and GET /home - Show the static homepage.
pub async fn home_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render_view(&state, View::Home, None)
}
