//! Filesystem adapters implementing the `FileHandler` port.

pub mod local;
pub mod memory;

pub use local::LocalFileHandler;
pub use memory::MemoryFileHandler;
