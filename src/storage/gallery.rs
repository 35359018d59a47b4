//! Gallery scanner: lists stored assets per category.

use std::fs;

use serde::Serialize;
use tracing::debug;

use super::{Category, UploadRoot};
use crate::Result;

/// A stored file within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    /// Category the asset was found in.
    pub category: Category,
    /// File name within the category directory.
    pub name: String,
    /// Full text, loaded for text assets only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Listing of every category, as shown on the collection view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Gallery {
    pub images: Vec<Asset>,
    pub videos: Vec<Asset>,
    pub audio: Vec<Asset>,
    pub text: Vec<Asset>,
}

impl Gallery {
    /// Assets of one category.
    pub fn assets(&self, category: Category) -> &[Asset] {
        match category {
            Category::Images => &self.images,
            Category::Videos => &self.videos,
            Category::Audio => &self.audio,
            Category::Text => &self.text,
        }
    }

    /// Total number of listed assets.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.assets(*c).len()).sum()
    }

    /// Whether no category has any asset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UploadRoot {
    /// List the assets of one category.
    ///
    /// Keeps regular files whose name carries one of the category's
    /// extensions, in directory enumeration order. Text assets are read
    /// fully. Nothing is cached; every call re-reads the directory.
    pub fn scan(&self, category: Category) -> Result<Vec<Asset>> {
        let dir = self.category_dir(category);
        let mut assets = Vec::new();

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    debug!(name = ?raw, "Skipping non UTF-8 file name");
                    continue;
                }
            };
            if !category.accepts(&name) {
                continue;
            }

            let content = match category {
                Category::Text => Some(fs::read_to_string(&path)?),
                _ => None,
            };

            assets.push(Asset {
                category,
                name,
                content,
            });
        }

        Ok(assets)
    }

    /// List every category.
    pub fn gallery(&self) -> Result<Gallery> {
        Ok(Gallery {
            images: self.scan(Category::Images)?,
            videos: self.scan(Category::Videos)?,
            audio: self.scan(Category::Audio)?,
            text: self.scan(Category::Text)?,
        })
    }
}
