//! Built-in application installer.
//!
//! Built-in apps (user, role, auth, smtp) ship as complete source trees
//! under the built-in apps root. Installing one is a validated recursive
//! copy into `<target>/src/<app>/`; nothing is rendered.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::FileHandler, services::GenerationReport},
    domain::{BuiltinCatalog, BuiltinPaths},
    error::HexgenResult,
};

/// Copies built-in app trees and skeleton files into a project.
pub struct BuiltinGenerator {
    files: Box<dyn FileHandler>,
    catalog: BuiltinCatalog,
    paths: BuiltinPaths,
}

impl BuiltinGenerator {
    /// Installer reading from `source_root`, the on-disk built-in apps tree.
    pub fn new(files: Box<dyn FileHandler>, source_root: impl AsRef<Path>) -> Self {
        Self {
            files,
            catalog: BuiltinCatalog::default(),
            paths: BuiltinPaths::new(source_root.as_ref()),
        }
    }

    pub fn catalog(&self) -> &BuiltinCatalog {
        &self.catalog
    }

    /// Install a built-in app into the project.
    ///
    /// The app name is validated against the catalog before any filesystem
    /// access; an unknown app never produces a partial copy. An existing
    /// target directory skips the whole copy unless `overwrite` is set.
    #[instrument(skip(self), fields(app = %app))]
    pub fn copy_app(
        &self,
        target_root: &Path,
        app: &str,
        overwrite: bool,
    ) -> HexgenResult<GenerationReport> {
        self.catalog.validate(app)?;

        let relative = format!("src/{app}");
        let copied = self.copy_tree(target_root, &relative, overwrite)?;

        if copied {
            info!("Built-in app installed");
        } else {
            info!("Built-in app already present, skipped");
        }
        Ok(GenerationReport {
            directories_created: usize::from(copied),
            directories_existing: usize::from(!copied),
            ..Default::default()
        })
    }

    /// Copy one directory tree from the built-in apps root, mirroring its
    /// relative path under `target_root`.
    pub fn copy_tree(
        &self,
        target_root: &Path,
        relative: &str,
        overwrite: bool,
    ) -> HexgenResult<bool> {
        let source = self.paths.source(relative);
        if !self.files.directory_exists(&source) {
            return Err(ApplicationError::SourceMissing { path: source }.into());
        }
        let target = self.paths.target(target_root, relative);
        self.files.copy_directory(&source, &target, overwrite)
    }

    /// Copy one file from the built-in apps root, mirroring its relative
    /// path under `target_root`.
    pub fn copy_file(
        &self,
        target_root: &Path,
        relative: &str,
        overwrite: bool,
    ) -> HexgenResult<bool> {
        let source = self.paths.source(relative);
        if !self.files.file_exists(&source) {
            return Err(ApplicationError::SourceMissing { path: source }.into());
        }
        let target = self.paths.target(target_root, relative);
        self.files.copy_file(&source, &target, overwrite)
    }
}
