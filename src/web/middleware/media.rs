//! Stored media filter.

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::storage::Category;
use crate::web::error::ApiError;

/// Whether `/media/<category>/<name>` names a file the gallery would list.
///
/// `path` is the raw request path; the name is percent-decoded before the
/// extension check. Nested paths are never listed, so they never match.
pub fn is_listed_media(path: &str) -> bool {
    let Some(rest) = path.strip_prefix("/media/") else {
        return false;
    };
    let Some((category, name)) = rest.split_once('/') else {
        return false;
    };
    let Ok(category) = category.parse::<Category>() else {
        return false;
    };
    let Ok(name) = urlencoding::decode(name) else {
        return false;
    };

    !name.is_empty() && !name.contains('/') && category.accepts(&name)
}

/// Only let requests for listed media reach the file service.
///
/// Anything else stored under the upload root (for example an `.html` file
/// posted past the picker) answers 404 instead of being served inline.
pub async fn media_filter(req: Request<Body>, next: Next) -> Response {
    if !is_listed_media(req.uri().path()) {
        tracing::debug!(path = %req.uri().path(), "Refused unlisted media");
        return ApiError::not_found("Media not found").into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, middleware, routing::get, Router};
    use tower::util::ServiceExt;

    #[test]
    fn test_listed_media() {
        assert!(is_listed_media("/media/images/photo.PNG"));
        assert!(is_listed_media("/media/images/raju%20patel.jpg"));
        assert!(is_listed_media("/media/audio/song.ogg"));
        assert!(is_listed_media("/media/text/story_20240115_103005.txt"));
    }

    #[test]
    fn test_unlisted_media() {
        assert!(!is_listed_media("/media/images/page.html"));
        assert!(!is_listed_media("/media/text/page.html"));
        assert!(!is_listed_media("/media/documents/a.png"));
        assert!(!is_listed_media("/media/images/"));
        assert!(!is_listed_media("/media/images"));
        assert!(!is_listed_media("/media/images/album/a.png"));
        assert!(!is_listed_media("/media/images/album%2Fa.png"));
        assert!(!is_listed_media("/other/images/a.png"));
    }

    #[tokio::test]
    async fn test_media_filter_blocks_unlisted() {
        let app = Router::new()
            .route("/media/:category/:name", get(|| async { "served" }))
            .layer(middleware::from_fn(media_filter));

        let allowed = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/media/videos/clip.mp4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(allowed.status(), StatusCode::OK);

        let blocked = app
            .oneshot(
                Request::builder()
                    .uri("/media/images/x.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(blocked.status(), StatusCode::NOT_FOUND);
    }
}
