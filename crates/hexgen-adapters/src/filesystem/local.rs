//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use hexgen_core::{
    application::{ApplicationError, ports::FileHandler},
    error::{HexgenError, HexgenResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileHandler;

impl LocalFileHandler {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandler for LocalFileHandler {
    fn create_directory(&self, path: &Path) -> HexgenResult<bool> {
        if path.exists() {
            if path.is_dir() {
                debug!(path = %path.display(), "directory already exists");
                return Ok(false);
            }
            return Err(ApplicationError::PathTypeConflict {
                path: path.to_path_buf(),
                expected: "directory",
            }
            .into());
        }

        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))?;
        debug!(path = %path.display(), "created directory");
        Ok(true)
    }

    fn write_file(&self, path: &Path, contents: &str, overwrite: bool) -> HexgenResult<bool> {
        if path.exists() {
            if path.is_dir() {
                return Err(ApplicationError::PathTypeConflict {
                    path: path.to_path_buf(),
                    expected: "file",
                }
                .into());
            }
            if !overwrite {
                info!(path = %path.display(), "file already exists, skipping");
                return Ok(false);
            }
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create parent directory"))?;
        }
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))?;
        debug!(path = %path.display(), "wrote file");
        Ok(true)
    }

    fn copy_file(&self, source: &Path, target: &Path, overwrite: bool) -> HexgenResult<bool> {
        if !source.is_file() {
            return Err(ApplicationError::SourceMissing {
                path: source.to_path_buf(),
            }
            .into());
        }
        if target.exists() {
            if target.is_dir() {
                return Err(ApplicationError::PathTypeConflict {
                    path: target.to_path_buf(),
                    expected: "file",
                }
                .into());
            }
            if !overwrite {
                info!(target = %target.display(), "file already exists, skipping");
                return Ok(false);
            }
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create parent directory"))?;
        }
        std::fs::copy(source, target).map_err(|e| map_io_error(target, e, "copy file"))?;
        debug!(source = %source.display(), target = %target.display(), "copied file");
        Ok(true)
    }

    fn copy_directory(&self, source: &Path, target: &Path, overwrite: bool) -> HexgenResult<bool> {
        if !source.exists() {
            return Err(ApplicationError::SourceMissing {
                path: source.to_path_buf(),
            }
            .into());
        }
        if !source.is_dir() {
            return Err(ApplicationError::PathTypeConflict {
                path: source.to_path_buf(),
                expected: "directory",
            }
            .into());
        }
        if target.exists() {
            if !overwrite {
                info!(target = %target.display(), "directory already exists, skipping");
                return Ok(false);
            }
            std::fs::remove_dir_all(target)
                .map_err(|e| map_io_error(target, e, "remove directory"))?;
        }

        // Whole tree in one pass so a skip is all-or-nothing.
        for entry in WalkDir::new(source) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map_or_else(|| source.to_path_buf(), Path::to_path_buf);
                HexgenError::from(ApplicationError::FileOperation {
                    path,
                    reason: format!("Failed to walk directory: {e}"),
                })
            })?;
            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| map_io_error(entry.path(), io::Error::other(e), "resolve path"))?;
            let dest = target.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest)
                    .map_err(|e| map_io_error(&dest, e, "create directory"))?;
            } else {
                std::fs::copy(entry.path(), &dest)
                    .map_err(|e| map_io_error(&dest, e, "copy file"))?;
            }
        }
        debug!(source = %source.display(), target = %target.display(), "copied directory");
        Ok(true)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> HexgenError {
    ApplicationError::FileOperation {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
