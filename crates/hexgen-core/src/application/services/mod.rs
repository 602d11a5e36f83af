//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the three
//! generation use cases: scaffold a CRUD module, install a built-in app,
//! and materialize the base project skeleton.

use serde::Serialize;

pub mod base_generator;
pub mod builtin_generator;
pub mod module_generator;

pub use base_generator::BaseProjectGenerator;
pub use builtin_generator::BuiltinGenerator;
pub use module_generator::{CrudLayout, ModuleGenerator};

/// Outcome counters for a generation run.
///
/// Skips are normal under no-overwrite semantics; a report where everything
/// was skipped means the target was already up to date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub directories_created: usize,
    pub directories_existing: usize,
    pub files_written: usize,
    pub files_skipped: usize,
}

impl GenerationReport {
    /// True if the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.directories_created == 0 && self.files_written == 0
    }
}
