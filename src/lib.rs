//! Kathavanam - a community story-sharing site.
//!
//! Visitors browse a static homepage, upload videos, audio, images and
//! written stories into per-category folders, and browse everything that
//! has been uploaded so far. Storage is a plain directory tree; there is no
//! database and no authentication.

pub mod config;
pub mod datetime;
pub mod error;
pub mod homepage;
pub mod logging;
pub mod storage;
pub mod web;

pub use config::Config;
pub use error::{KathaError, Result};
pub use homepage::Homepage;
pub use storage::{Asset, Category, Gallery, UploadRoot};
pub use web::{create_router, AppState, WebServer};
