//! Base project skeleton generator.
//!
//! Every project needs the same backbone before any module can live in it:
//! config, entrypoint, migrations scaffolding, container files. The base
//! generator copies that backbone from the built-in apps root and runs
//! before every generation command. Existing entries are skipped, so
//! repeated runs cost nothing.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::services::{BuiltinGenerator, GenerationReport},
    error::HexgenResult,
};

/// Directories every project must have, copied as whole trees.
pub const MANDATORY_DIRS: [&str; 3] = ["env_vars", "src/alembic", "src/common"];

/// Files every project must have.
pub const MANDATORY_FILES: [&str; 11] = [
    "src/__init__.py",
    "src/main.py",
    "src/config.py",
    ".env",
    ".gitignore",
    "alembic.ini",
    "docker-compose.yml",
    "dockerfile",
    "init.sh",
    "requirements.txt",
    "readme.md",
];

/// Materializes the mandatory project structure.
pub struct BaseProjectGenerator {
    builtin: BuiltinGenerator,
}

impl BaseProjectGenerator {
    pub fn new(builtin: BuiltinGenerator) -> Self {
        Self { builtin }
    }

    /// Ensure all mandatory directories and files exist under `target_root`.
    ///
    /// Copies run in a fixed order, directories first. Nothing existing is
    /// ever overwritten.
    #[instrument(skip_all, fields(target = %target_root.display()))]
    pub fn run(&self, target_root: &Path) -> HexgenResult<GenerationReport> {
        let mut report = GenerationReport::default();

        for dir in MANDATORY_DIRS {
            if self.builtin.copy_tree(target_root, dir, false)? {
                report.directories_created += 1;
            } else {
                report.directories_existing += 1;
            }
        }

        for file in MANDATORY_FILES {
            if self.builtin.copy_file(target_root, file, false)? {
                report.files_written += 1;
            } else {
                report.files_skipped += 1;
            }
        }

        if report.is_noop() {
            info!("Base project structure already in place");
        } else {
            info!(
                directories = report.directories_created,
                files = report.files_written,
                "Base project structure created"
            );
        }
        Ok(report)
    }
}
