//! Utility functions for error handling
//!
//! File access helpers that attach the path to every failure.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DashboardError, Result};

/// Read a UTF-8 file, reporting the path and purpose on failure
///
/// # Arguments
/// * `path` - The file to read
/// * `purpose` - Why the file is being read, used in the log line
pub fn read_text_file(path: &Path, purpose: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let hint = match e.kind() {
            io::ErrorKind::NotFound => "file not found",
            io::ErrorKind::PermissionDenied => "permission denied",
            _ => "read failed",
        };
        log::error!("Failed reading {} for {purpose}: {hint}", path.display());
        DashboardError::io(path, e)
    })
}

/// Check that a directory exists and is a directory
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(DashboardError::io(
            path,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory not found (needed for {purpose})"),
            ),
        ));
    }

    if !path.is_dir() {
        return Err(DashboardError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path is not a directory (expected for {purpose})"),
            ),
        ));
    }

    Ok(())
}

/// Create a directory and its parents if needed
pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| DashboardError::io(path, e))
}
