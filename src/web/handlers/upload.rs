//! Upload view handlers.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use chrono::Utc;
use std::sync::Arc;

use super::{render_view, AppState};
use crate::storage::Category;
use crate::web::dto::{ApiResponse, StoryForm, UploadResponse};
use crate::web::error::ApiError;
use crate::web::pages::{self, Notice, STORY_EMPTY, STORY_SAVED};
use crate::web::view::View;
use crate::KathaError;

/// Pull the `file` field out of a multipart body.
///
/// Other fields are ignored.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    let mut filename: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    })? {
        if field.name() != Some("file") {
            continue;
        }
        filename = field.file_name().map(|s| s.to_string());
        content = Some(
            field
                .bytes()
                .await
                .map_err(|e| {
                    tracing::warn!("Failed to read file content: {}", e);
                    ApiError::bad_request("Failed to read file")
                })?
                .to_vec(),
        );
    }

    let filename = filename.ok_or_else(|| ApiError::bad_request("No file provided"))?;
    let content = content.ok_or_else(|| ApiError::bad_request("No file content"))?;
    Ok((filename, content))
}

/// GET /upload - Show the upload tabs.
pub async fn upload_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render_view(&state, View::Upload, None)
}

/// POST /upload/:category - Store an uploaded file.
///
/// Request body: multipart/form-data with a "file" field. The stored path is
/// echoed back on the upload view. A file name with no usable component is
/// answered with 422 and an error notice.
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let category: Category = category.parse()?;
    let (filename, content) = read_file_field(&mut multipart).await?;

    match state.uploads.persist(category, &filename, &content) {
        Ok(path) => {
            let notice = Notice::Success(pages::upload_saved(category, &path));
            Ok(render_view(&state, View::Upload, Some(&notice))?.into_response())
        }
        Err(KathaError::Validation(msg)) => {
            tracing::debug!(%category, "Rejected upload: {}", msg);
            let notice = Notice::Error(pages::upload_failed(category, &msg));
            let page = render_view(&state, View::Upload, Some(&notice))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /api/upload/:category - Store an uploaded file, answering with JSON.
pub async fn upload_file_json(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, ApiError> {
    let category: Category = category.parse()?;
    let (filename, content) = read_file_field(&mut multipart).await?;
    let path = state.uploads.persist(category, &filename, &content)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Json(ApiResponse::new(UploadResponse {
        category: category.dir_name().to_string(),
        name,
        path: path.display().to_string(),
    })))
}

/// POST /stories - Store a story note.
///
/// Blank text is rejected with 422 and an error notice; nothing is written.
pub async fn submit_story(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StoryForm>,
) -> Result<Response, ApiError> {
    match state.uploads.persist_note(&form.story, Utc::now()) {
        Ok(_) => {
            let notice = Notice::Success(STORY_SAVED.to_string());
            Ok(render_view(&state, View::Upload, Some(&notice))?.into_response())
        }
        Err(KathaError::Validation(msg)) => {
            tracing::debug!("Rejected story note: {}", msg);
            let notice = Notice::Error(STORY_EMPTY.to_string());
            let page = render_view(&state, View::Upload, Some(&notice))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
