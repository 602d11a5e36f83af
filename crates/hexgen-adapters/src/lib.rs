//! Infrastructure adapters for Hexgen.
//!
//! This crate implements the ports defined in `hexgen_core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the
//! built-in template layouts that ship with the tool.

pub mod builtin_root;
pub mod filesystem;
pub mod layout;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFileHandler, MemoryFileHandler};
pub use renderer::TeraRenderer;
