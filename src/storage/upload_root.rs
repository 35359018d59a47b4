//! The upload root directory and the file persister.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Category;
use crate::{KathaError, Result};

/// Handle to the upload root.
///
/// Holds no open files or locks; concurrent writers of the same name race
/// and the last completed write wins.
#[derive(Debug, Clone)]
pub struct UploadRoot {
    /// Top-level directory holding the category folders.
    root: PathBuf,
    /// Timezone used for story note names (empty = host local time).
    timezone: String,
}

impl UploadRoot {
    /// Open the upload root, creating the category layout if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let upload_root = Self {
            root: root.into(),
            timezone: String::new(),
        };
        upload_root.ensure_layout()?;
        Ok(upload_root)
    }

    /// Set the timezone used when naming story notes.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Get the root path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Get the configured note timezone.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Ensure every category directory exists.
    ///
    /// Idempotent. Any failure other than "already exists" is returned.
    pub fn ensure_layout(&self) -> Result<()> {
        for category in Category::ALL {
            let dir = self.category_dir(category);
            if !dir.is_dir() {
                fs::create_dir_all(&dir)?;
                info!(path = %dir.display(), "Created category directory");
            }
        }
        Ok(())
    }

    /// Get the directory for a category.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.root.join(category.dir_name())
    }

    /// Write an uploaded file to `{root}/{category}/{name}`.
    ///
    /// The content is written verbatim and replaces any existing file of
    /// the same name. Only the final component of `client_name` is used.
    ///
    /// # Returns
    ///
    /// The path the file was written to.
    pub fn persist(
        &self,
        category: Category,
        client_name: &str,
        content: &[u8],
    ) -> Result<PathBuf> {
        let name = Self::stored_name(client_name)?;
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir)?;

        let path = dir.join(name);
        if path.exists() {
            debug!(path = %path.display(), "Overwriting existing upload");
        }
        fs::write(&path, content)?;

        info!(
            category = %category,
            path = %path.display(),
            size = content.len(),
            "Stored upload"
        );
        Ok(path)
    }

    /// Reduce a client-supplied file name to its final path component.
    fn stored_name(client_name: &str) -> Result<&str> {
        Path::new(client_name)
            .file_name()
            .and_then(|s| s.to_str())
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| KathaError::Validation(format!("invalid file name '{client_name}'")))
    }
}
