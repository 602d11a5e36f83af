//! Domain layer: pure logic with no I/O.
//!
//! Everything here is deterministic and filesystem-free. Names, actions,
//! paths, and plans are validated and frozen before the application layer
//! touches any adapter.

pub mod catalog;
pub mod error;
pub mod naming;
pub mod paths;
pub mod plan;

pub use catalog::BuiltinCatalog;
pub use error::DomainError;
pub use naming::ModuleName;
pub use paths::{BuiltinPaths, MODULE_DIRECTORIES, ModulePaths};
pub use plan::{
    ActionSet, DEFAULT_ACTIONS, GenerationPlan, PlannedFile, RenderContext, TemplateSpec,
};
