//! Request handlers.

pub mod collection;
pub mod home;
pub mod upload;

pub use collection::{collection_json, collection_page};
pub use home::home_page;
pub use upload::{submit_story, upload_file, upload_file_json, upload_page};

use axum::response::Html;

use crate::config::Config;
use crate::homepage::Homepage;
use crate::storage::UploadRoot;
use crate::Result;

use super::error::ApiError;
use super::pages::{self, Notice};
use super::view::View;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Upload root all views read from and write to.
    pub uploads: UploadRoot,
    /// Homepage renderer.
    pub homepage: Homepage,
    /// Site title.
    pub site_title: String,
}

impl AppState {
    /// Create application state with the default site title.
    pub fn new(uploads: UploadRoot, homepage: Homepage) -> Self {
        Self {
            uploads,
            homepage,
            site_title: crate::config::SiteConfig::default().title,
        }
    }

    /// Build application state from configuration.
    ///
    /// Opens the upload root, which creates the category layout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let uploads = UploadRoot::open(&config.storage.upload_root)?
            .with_timezone(&config.storage.timezone);
        let homepage = Homepage::from_config(&config.homepage);
        Ok(Self::new(uploads, homepage).with_site_title(&config.site.title))
    }

    /// Set the site title.
    pub fn with_site_title(mut self, title: &str) -> Self {
        self.site_title = title.to_string();
        self
    }
}

/// Render one view inside the site layout.
///
/// `notice` is only shown by the upload view.
pub fn render_view(
    state: &AppState,
    view: View,
    notice: Option<&Notice>,
) -> std::result::Result<Html<String>, ApiError> {
    let body = match view {
        View::Home => home::home_body(state)?,
        View::Upload => pages::upload_body(notice),
        View::Collection => collection::collection_body(state)?,
    };
    Ok(Html(pages::layout(&state.site_title, view, &body)))
}
