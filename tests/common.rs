//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out a temporary site: a settings file and a
//! content directory of page fragments.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Settings document used by the home page scenario.
///
/// Twitter handle set, Facebook handle and logo absent, one navigation link.
pub const SCENARIO_SETTINGS: &str = r#"{
    "title": "Blog",
    "description": "A blog",
    "lang": "en",
    "logo": null,
    "cover_image": null,
    "twitter": "@me",
    "facebook": null,
    "codeinjection_styles": ".site-head { background: #222; }",
    "navigation": [{"label": "About", "url": "/about"}]
}"#;

/// Temporary site layout with settings and content fragments.
pub struct TestSite {
    pub dir: TempDir,
    pub settings: PathBuf,
    pub content: PathBuf,
    pub output: PathBuf,
}

/// Creates a temporary site with the given settings and fragments.
///
/// # Arguments
///
/// * `settings_json`: Settings document written to `settings.json`
/// * `fragments`: (file name, HTML) pairs written to `content/`
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_test_site(settings_json: &str, fragments: &[(&str, &str)]) -> Result<TestSite> {
    let dir = TempDir::new()?;
    let settings = dir.path().join("settings.json");
    let content = dir.path().join("content");
    let output = dir.path().join("dist");

    std::fs::write(&settings, settings_json)?;
    std::fs::create_dir_all(&content)?;
    for (name, html) in fragments {
        write_file(&content, name, html)?;
    }

    Ok(TestSite {
        dir,
        settings,
        content,
        output,
    })
}

/// Writes file, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
