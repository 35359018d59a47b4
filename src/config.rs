//! Configuration module for Kathavanam.

use serde::Deserialize;
use std::path::Path;

use crate::{KathaError, Result};

/// Environment variable that overrides `storage.upload_root`.
pub const UPLOAD_ROOT_ENV: &str = "KATHAVANAM_UPLOAD_ROOT";

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    /// Host address to bind.
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// CORS allowed origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Maximum request body size in megabytes (0 = unlimited).
    #[serde(default)]
    pub max_upload_size_mb: u64,
}

fn default_web_host() -> String {
    "0.0.0.0".to_string()
}

fn default_web_port() -> u16 {
    8501
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_web_host(),
            port: default_web_port(),
            cors_origins: vec![],
            max_upload_size_mb: 0,
        }
    }
}

/// Upload storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the category folders.
    #[serde(default = "default_upload_root")]
    pub upload_root: String,
    /// Timezone used for story note names (empty = host local time).
    #[serde(default)]
    pub timezone: String,
}

fn default_upload_root() -> String {
    "uploads".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_root: default_upload_root(),
            timezone: String::new(),
        }
    }
}

/// Homepage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HomepageConfig {
    /// Path to the homepage markup document.
    #[serde(default = "default_document")]
    pub document: String,
    /// Directory the embedded images are read from.
    #[serde(default = "default_asset_dir")]
    pub asset_dir: String,
    /// Image file names inlined as data URIs when present.
    #[serde(default = "default_embedded_images")]
    pub embedded_images: Vec<String>,
    /// Display height of the homepage frame in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_document() -> String {
    "index.html".to_string()
}

fn default_asset_dir() -> String {
    ".".to_string()
}

fn default_embedded_images() -> Vec<String> {
    vec![
        "Gemini_Generated_Image_e3tuzfe3tuzfe3tu.jpg".to_string(),
        "geeta.jpg".to_string(),
        "raju patel.jpg".to_string(),
        "arjun.jpg".to_string(),
    ]
}

fn default_height() -> u32 {
    3000
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            asset_dir: default_asset_dir(),
            embedded_images: default_embedded_images(),
            height: default_height(),
        }
    }
}

/// Site information configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Title shown in the browser tab and sidebar.
    #[serde(default = "default_site_title")]
    pub title: String,
}

fn default_site_title() -> String {
    "కథావనం".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file (empty = console only).
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/kathavanam.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Web server configuration.
    #[serde(default)]
    pub web: WebConfig,
    /// Upload storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Homepage configuration.
    #[serde(default)]
    pub homepage: HomepageConfig,
    /// Site information.
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(KathaError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| KathaError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `KATHAVANAM_UPLOAD_ROOT`: Override the upload root directory
    pub fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var(UPLOAD_ROOT_ENV) {
            if !root.is_empty() {
                self.storage.upload_root = root;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the upload root is empty
    /// - the storage timezone is set but not a known IANA name
    /// - the homepage height is zero
    pub fn validate(&self) -> Result<()> {
        if self.storage.upload_root.trim().is_empty() {
            return Err(KathaError::Config("storage.upload_root is empty".to_string()));
        }
        if !self.storage.timezone.is_empty()
            && self.storage.timezone.parse::<chrono_tz::Tz>().is_err()
        {
            return Err(KathaError::Config(format!(
                "unknown timezone '{}'",
                self.storage.timezone
            )));
        }
        if self.homepage.height == 0 {
            return Err(KathaError::Config("homepage.height must be positive".to_string()));
        }
        Ok(())
    }
}
