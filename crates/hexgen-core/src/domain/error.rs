//! Domain layer errors.
//!
//! All errors are:
//! - Cloneable (for retry logic)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

use crate::domain::naming;
use crate::error::ErrorCategory;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Naming Errors
    // ========================================================================
    /// The user-supplied model name matches none of the expected conventions.
    ///
    /// `expected` names the convention(s) that were checked, e.g.
    /// `"PascalCase"` or `"PascalCase or snake_case"`.
    #[error("'{name}' is not valid {expected}")]
    InvalidName { name: String, expected: &'static str },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown action '{action}' (known actions: {known})")]
    UnknownAction { action: String, known: String },

    #[error("invalid built-in app '{app}' (available apps: {available})")]
    UnknownApp { app: String, available: String },

    #[error("action list is empty")]
    EmptyActionSet,

    // ========================================================================
    // Plan Constraint Violations
    // ========================================================================
    #[error("duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("generation plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => {
                let mut out = vec![
                    "Model names must be PascalCase ('UserAccount') or snake_case ('user_account')"
                        .into(),
                ];
                if let Some(fix) = naming::suggest_fix(name) {
                    out.push(format!("Did you mean: {fix}?"));
                }
                out
            }
            Self::UnknownAction { known, .. } => vec![
                format!("Known actions: {known}"),
                "Pass actions with: --actions create list retrieve".into(),
            ],
            Self::UnknownApp { available, .. } => vec![
                format!("Available built-in apps: {available}"),
                "Example: hexgen builtin user".into(),
            ],
            Self::EmptyActionSet => vec![
                "Provide at least one action, or omit --actions to use the full set".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two planned files resolve to: {path}"),
                "This indicates a broken layout configuration".into(),
            ],
            Self::EmptyPlan => vec!["The layout configuration produced nothing to generate".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::UnknownAction { .. }
            | Self::UnknownApp { .. }
            | Self::EmptyActionSet => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::EmptyPlan => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_name_display_names_checked_formats() {
        let err = DomainError::InvalidName {
            name: "user-account".into(),
            expected: "PascalCase or snake_case",
        };
        let msg = err.to_string();
        assert!(msg.contains("user-account"));
        assert!(msg.contains("PascalCase"));
        assert!(msg.contains("snake_case"));
    }

    #[test]
    fn invalid_name_suggestion_includes_fix() {
        let err = DomainError::InvalidName {
            name: "user-account".into(),
            expected: "PascalCase or snake_case",
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("user_account"))
        );
    }

    #[test]
    fn plan_errors_are_internal() {
        let err = DomainError::EmptyPlan;
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
