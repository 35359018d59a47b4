//! Middleware for the web layer.

pub mod cors;
pub mod media;
pub mod security;

pub use cors::create_cors_layer;
pub use media::media_filter;
pub use security::security_headers;
