//! Media categories.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::KathaError;

/// One of the four fixed media kinds.
///
/// The category decides both the storage subdirectory and the extension
/// allow-list used when listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Videos,
    Audio,
    Images,
    Text,
}

impl Category {
    /// All categories, in storage layout order.
    pub const ALL: [Category; 4] = [
        Category::Videos,
        Category::Audio,
        Category::Images,
        Category::Text,
    ];

    /// Name of the subdirectory under the upload root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Images => "images",
            Category::Text => "text",
        }
    }

    /// Allowed file extensions, lowercase and without the dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Category::Videos => &["mp4", "mov", "avi"],
            Category::Audio => &["mp3", "wav", "ogg"],
            Category::Images => &["jpg", "jpeg", "png"],
            Category::Text => &["txt"],
        }
    }

    /// Whether `file_name` carries one of this category's extensions.
    ///
    /// Matching is a case-insensitive suffix test, so `photo.PNG` is an
    /// image. Media extensions match without a dot (`photojpg` counts);
    /// text needs the literal `.txt` suffix.
    pub fn accepts(self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions().iter().any(|ext| match self {
            Category::Text => lower
                .strip_suffix(ext)
                .is_some_and(|stem| stem.ends_with('.')),
            _ => lower.ends_with(ext),
        })
    }

    /// Extension list in the form an `<input type="file" accept>` expects.
    pub fn accept_attr(self) -> String {
        self.extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Category {
    type Err = KathaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.dir_name() == s)
            .ok_or_else(|| KathaError::NotFound(format!("category '{s}'")))
    }
}
