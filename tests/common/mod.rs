//! Test helpers for the web integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use axum_test::TestServer;
use kathavanam::config::WebConfig;
use kathavanam::{create_router, AppState, Category, Homepage, UploadRoot};
use tempfile::TempDir;

/// Homepage document used by the tests.
pub const HOMEPAGE: &str = r#"<html><body><h1>కథావనం</h1><img src="geeta.jpg"><img src="arjun.jpg"></body></html>"#;

/// A router over a temporary upload root and homepage.
pub struct TestSite {
    pub server: TestServer,
    pub temp_dir: TempDir,
    pub uploads: UploadRoot,
}

impl TestSite {
    /// Directory of one category.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.uploads.category_dir(category)
    }

    /// File names currently stored in a category.
    pub fn stored_names(&self, category: Category) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.category_dir(category))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }
}

/// Create a test configuration.
pub fn create_test_config() -> WebConfig {
    WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![],
        max_upload_size_mb: 0,
    }
}

/// Create a test site with the default homepage and an empty upload root.
///
/// `geeta.jpg` exists next to the homepage; `arjun.jpg` does not.
pub fn create_test_site() -> TestSite {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let site_dir = temp_dir.path().join("site");
    fs::create_dir_all(&site_dir).unwrap();
    fs::write(site_dir.join("index.html"), HOMEPAGE).unwrap();
    fs::write(site_dir.join("geeta.jpg"), b"abc").unwrap();

    let uploads = UploadRoot::open(temp_dir.path().join("uploads"))
        .expect("Failed to open upload root")
        .with_timezone("UTC");
    let homepage = Homepage::new(site_dir.join("index.html"), &site_dir)
        .with_embedded_images(vec!["geeta.jpg".to_string(), "arjun.jpg".to_string()]);

    let app_state = Arc::new(AppState::new(uploads.clone(), homepage));
    let router = create_router(app_state, &create_test_config());
    let server = TestServer::new(router).expect("Failed to create test server");

    TestSite {
        server,
        temp_dir,
        uploads,
    }
}
