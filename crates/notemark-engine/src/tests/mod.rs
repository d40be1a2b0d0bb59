use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::SiteLayout;

/// Create a temporary directory for a test
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Create a temporary site with its source directory in place
pub fn create_test_site() -> (TempDir, SiteLayout) {
    let base = create_test_dir();
    let layout = SiteLayout::from_base_dir(base.path());
    fs::create_dir_all(&layout.src_dir).unwrap();
    (base, layout)
}

/// Write an article source into the site's source directory
pub fn create_test_article(layout: &SiteLayout, filename: &str, content: &str) -> PathBuf {
    let file_path = layout.src_dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
