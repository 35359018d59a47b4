//! Request and response types for the web layer.

pub mod request;
pub mod response;

pub use request::StoryForm;
pub use response::{ApiResponse, UploadResponse};
