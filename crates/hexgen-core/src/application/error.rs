//! Application layer errors.
//!
//! These errors represent orchestration failures: rendering, filesystem
//! access, missing sources. Business rule violations are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while executing a generation run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed.
    #[error("rendering '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// A filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FileOperation { path: PathBuf, reason: String },

    /// A copy source does not exist.
    #[error("source not found: {path}")]
    SourceMissing { path: PathBuf },

    /// A path exists but is the wrong kind of entry.
    ///
    /// Raised when a file stands where a directory is needed, or the other
    /// way around. Never resolved silently.
    #[error("{path} exists but is not a {expected}")]
    PathTypeConflict {
        path: PathBuf,
        expected: &'static str,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{template}' could not be rendered"),
                "This indicates a broken template, please report it".into(),
            ],
            Self::FileOperation { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the target directory is accessible".into(),
            ],
            Self::SourceMissing { path } => vec![
                format!("Expected to find: {}", path.display()),
                "Check the built-in apps root (--builtin-root or HEXGEN_BUILTIN_ROOT)".into(),
            ],
            Self::PathTypeConflict { path, expected } => vec![
                format!("{} blocks generation", path.display()),
                format!("Remove or rename it so a {expected} can be created there"),
            ],
        }
    }

    /// Get error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } | Self::FileOperation { .. } => ErrorCategory::Internal,
            Self::SourceMissing { .. } => ErrorCategory::NotFound,
            Self::PathTypeConflict { .. } => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_missing_is_not_found() {
        let err = ApplicationError::SourceMissing {
            path: PathBuf::from("/assets/builtin_apps/src/user"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("builtin")));
    }

    #[test]
    fn path_conflict_names_expected_kind() {
        let err = ApplicationError::PathTypeConflict {
            path: PathBuf::from("/project/src"),
            expected: "directory",
        };
        assert!(err.to_string().contains("not a directory"));
    }
}
