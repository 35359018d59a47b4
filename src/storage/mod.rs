//! Upload storage for Kathavanam.
//!
//! Uploaded media lives in a flat directory per category:
//! ```text
//! {upload_root}/
//! ├── videos/
//! ├── audio/
//! ├── images/
//! └── text/
//!     └── story_20240115_103005.txt
//! ```
//! Files are keyed only by name; a second upload with the same name
//! replaces the first. Listings re-read the directories on every call.

mod category;
mod gallery;
mod note;
mod upload_root;

pub use category::Category;
pub use gallery::{Asset, Gallery};
pub use note::note_file_name;
pub use upload_root::UploadRoot;

/// Prefix of generated story note names.
pub const NOTE_PREFIX: &str = "story_";

/// Extension of generated story note names.
pub const NOTE_EXTENSION: &str = "txt";
