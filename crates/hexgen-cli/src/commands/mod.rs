//! Command handlers.
//!
//! Each handler translates CLI arguments into core service calls and
//! displays results. No business logic lives here.

pub mod builtin;
pub mod crud;

use std::path::{Path, PathBuf};

use tracing::debug;

use hexgen_adapters::{LocalFileHandler, builtin_root};
use hexgen_core::prelude::*;

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Resolve the project root generated files land in.
///
/// Priority: `--target`, then config, then the current directory.
fn resolve_target_root(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    global
        .target
        .clone()
        .or_else(|| config.generation.target_root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve the built-in apps root or fail with an actionable error.
fn resolve_builtin_root(global: &GlobalArgs, config: &AppConfig) -> CliResult<PathBuf> {
    let explicit = global
        .builtin_root
        .clone()
        .or_else(|| config.generation.builtin_root.clone());
    builtin_root::resolve(explicit).ok_or(CliError::BuiltinRootNotFound)
}

/// Build the installer reading from the resolved built-in apps root.
fn builtin_installer(source_root: &Path) -> BuiltinGenerator {
    BuiltinGenerator::new(Box::new(LocalFileHandler::new()), source_root)
}

/// Materialize the base project skeleton.
///
/// Runs before every generating command; existing entries are skipped, so
/// this is free on re-runs.
fn ensure_base_project(
    target_root: &Path,
    source_root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let base = BaseProjectGenerator::new(builtin_installer(source_root));
    let report = base.run(target_root)?;

    debug!(?report, "base skeleton ensured");
    if !report.is_noop() {
        output.info(&format!(
            "Base project structure created ({} directories, {} files)",
            report.directories_created, report.files_written
        ))?;
    }
    Ok(())
}
