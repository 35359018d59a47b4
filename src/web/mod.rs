//! Web interface for Kathavanam.
//!
//! Server-rendered pages for the three views, a small JSON API mirroring
//! the collection and upload actions, and static serving of stored media.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod server;
pub mod view;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
pub use view::View;
