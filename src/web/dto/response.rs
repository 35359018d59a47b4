//! Response types.

use serde::Serialize;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Result of a stored upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    /// Category directory the file went to.
    pub category: String,
    /// Stored file name.
    pub name: String,
    /// Path the file was written to.
    pub path: String,
}
