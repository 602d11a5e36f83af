//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hexgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RenderContext;
use crate::error::HexgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hexgen_adapters::filesystem::LocalFileHandler` (production)
/// - `hexgen_adapters::filesystem::MemoryFileHandler` (testing)
///
/// ## Contract
///
/// Every operation is idempotent under the same inputs. Boolean returns mean
/// "did work happen": `false` is a skip, not a failure. A path that exists as
/// the wrong kind of entry is always an error, never silently resolved.
pub trait FileHandler: Send + Sync {
    /// Create a directory and all parent directories.
    ///
    /// Returns `true` if the directory was created, `false` if it already
    /// existed. Errors if the path exists as a file.
    fn create_directory(&self, path: &Path) -> HexgenResult<bool>;

    /// Write content to a file, creating parent directories as needed.
    ///
    /// With `overwrite` false, an existing file is left untouched and the
    /// call returns `false`. Errors if the path exists as a directory.
    fn write_file(&self, path: &Path, contents: &str, overwrite: bool) -> HexgenResult<bool>;

    /// Copy a single file, creating parent directories as needed.
    ///
    /// Skip semantics match [`FileHandler::write_file`]. Errors if the
    /// source does not exist or is not a file.
    fn copy_file(&self, source: &Path, target: &Path, overwrite: bool) -> HexgenResult<bool>;

    /// Copy a directory tree recursively.
    ///
    /// With `overwrite` false, an existing target skips the whole copy and
    /// returns `false`; no partial merge happens. With `overwrite` true, the
    /// existing target is removed and replaced. Errors if the source does
    /// not exist or is not a directory.
    fn copy_directory(&self, source: &Path, target: &Path, overwrite: bool) -> HexgenResult<bool>;

    /// True if the path exists and is a file.
    fn file_exists(&self, path: &Path) -> bool;

    /// True if the path exists and is a directory.
    fn directory_exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `hexgen_adapters::renderer::TeraRenderer` (production)
///
/// ## Contract
///
/// Rendering is referentially transparent: the same source and context
/// always produce the same output, with no filesystem or environment reads.
pub trait TemplateEngine: Send + Sync {
    /// Render template `source` with the given context.
    ///
    /// `name` identifies the template in error messages only.
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> HexgenResult<String>;
}
