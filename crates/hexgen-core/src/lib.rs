//! Hexgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Hexgen
//! module generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           hexgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ModuleGenerator, BuiltinGenerator,     │
//! │  BaseProjectGenerator)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: FileHandler, TemplateEngine) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    hexgen-adapters (Infrastructure)     │
//! │  (LocalFileHandler, TeraRenderer, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ModuleName, ActionSet, ModulePaths,   │
//! │   GenerationPlan)                       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hexgen_core::domain::{ActionSet, ModuleName};
//!
//! // 1. Normalize the user-supplied model name
//! let module = ModuleName::parse("UserAccount").unwrap();
//! assert_eq!(module.snake(), "user_account");
//!
//! // 2. Hand it to a ModuleGenerator built with injected adapters
//! //    (see hexgen-adapters for FileHandler / TemplateEngine impls).
//! let actions = ActionSet::all();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BaseProjectGenerator, BuiltinGenerator, CrudLayout, GenerationReport, ModuleGenerator,
        ports::{FileHandler, TemplateEngine},
    };
    pub use crate::domain::{
        ActionSet, BuiltinCatalog, BuiltinPaths, GenerationPlan, ModuleName, ModulePaths,
        RenderContext, TemplateSpec,
    };
    pub use crate::error::{HexgenError, HexgenResult};
}
