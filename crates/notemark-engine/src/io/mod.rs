use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of article sources.
pub const SOURCE_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
}

/// Read an article source and return its content
pub fn read_file(relative_path: &RelativePath, src_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(src_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write a rendered page, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for article sources under the source directory
pub fn scan_source_files(src_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_source_dir(src_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(src_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == SOURCE_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
