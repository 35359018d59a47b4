//! Static homepage rendering.
//!
//! The homepage is an externally supplied markup document. Before it is
//! shown, every literal occurrence of a known image file name is replaced by
//! a `data:` URI carrying that image, so the page needs no further requests.
//! The document on disk is never modified.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::config::HomepageConfig;
use crate::Result;

/// Mime type used when the image name gives no usable hint.
const FALLBACK_IMAGE_MIME: &str = "image/jpeg";

/// Homepage renderer.
#[derive(Debug, Clone)]
pub struct Homepage {
    /// Path to the markup document.
    document: PathBuf,
    /// Directory the embedded images are read from.
    asset_dir: PathBuf,
    /// Image file names to inline.
    embedded_images: Vec<String>,
    /// Display height in pixels.
    height: u32,
}

impl Homepage {
    /// Create a renderer for `document` with no images to inline.
    pub fn new(document: impl Into<PathBuf>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            asset_dir: asset_dir.into(),
            embedded_images: Vec::new(),
            height: 3000,
        }
    }

    /// Create a renderer from configuration.
    pub fn from_config(config: &HomepageConfig) -> Self {
        Self::new(&config.document, &config.asset_dir)
            .with_embedded_images(config.embedded_images.clone())
            .with_height(config.height)
    }

    /// Set the image file names to inline.
    pub fn with_embedded_images(mut self, images: Vec<String>) -> Self {
        self.embedded_images = images;
        self
    }

    /// Set the display height.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Display height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Path to the markup document.
    pub fn document(&self) -> &Path {
        &self.document
    }

    /// Load the document and inline the known images.
    ///
    /// Runs on every call. A missing document is an error; a missing image
    /// leaves its name in place.
    pub fn render(&self) -> Result<String> {
        let mut html = fs::read_to_string(&self.document)?;

        for name in &self.embedded_images {
            let path = self.asset_dir.join(name);
            if !path.is_file() {
                debug!(image = %name, "Embedded image not found, leaving reference");
                continue;
            }
            if !html.contains(name.as_str()) {
                continue;
            }
            let bytes = fs::read(&path)?;
            html = html.replace(name.as_str(), &data_uri(name, &bytes));
        }

        Ok(html)
    }
}

/// Encode image bytes as a `data:` URI.
pub fn data_uri(name: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(name)
        .first_raw()
        .filter(|m| m.starts_with("image/"))
        .unwrap_or(FALLBACK_IMAGE_MIME);
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
