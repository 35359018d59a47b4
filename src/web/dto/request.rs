//! Request types.

use serde::Deserialize;

/// Story note submission from the upload view's text tab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryForm {
    /// Free-form story text.
    #[serde(default)]
    pub story: String,
}
