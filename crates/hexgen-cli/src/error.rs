//! Error handling for the Hexgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping
//!
//! # Exit codes
//!
//! Every handled error exits with code 1; success is 0. Interrupts (SIGINT)
//! terminate with the shell-reported 130 via the default signal disposition.

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::error;

use hexgen_core::error::{ErrorCategory, HexgenError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from the generation core.
    ///
    /// Wrapped here so the CLI can attach suggestions drawn from the core
    /// error's category without touching core internals.
    #[error("Generation failed: {0}")]
    Core(#[from] HexgenError),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No built-in apps root could be located.
    #[error("Built-in apps directory not found")]
    BuiltinRootNotFound,

    /// An I/O operation failed at the CLI layer (terminal writes).
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check the file passed via --config".into(),
            ],
            Self::BuiltinRootNotFound => vec![
                "Pass --builtin-root DIR or set HEXGEN_BUILTIN_ROOT".into(),
                "The directory must contain the shipped assets/builtin_apps tree".into(),
            ],
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => core.category(),
            Self::ConfigError { .. } | Self::BuiltinRootNotFound => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS. Handled errors are always 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        let _ = write!(output, "\n{} {}\n\n", "✗".red().bold(), "Error:".red().bold());
        let _ = writeln!(output, "  {}", self.to_string().red());

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = writeln!(output, "\n  {} {}", "→".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(output, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {} {}", "•".yellow(), suggestion);
            }
        }

        output
    }

    /// Format the error without ANSI codes, for piped stderr.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\nError:\n  {self}");

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = writeln!(output, "  caused by: {err}");
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(output, "\nSuggestions:");
            for suggestion in suggestions {
                let _ = writeln!(output, "  - {suggestion}");
            }
        }

        output
    }

    /// Emit a structured log event for this error.
    pub fn log(&self) {
        error!(category = ?self.category(), "{self}");
    }
}

/// Convenience constructor for configuration failures.
pub fn config_error(err: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: format!("{err:#}"),
        source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgen_core::domain::DomainError;

    #[test]
    fn every_error_exits_one() {
        let core: CliError = HexgenError::from(DomainError::EmptyActionSet).into();
        assert_eq!(core.exit_code(), 1);
        assert_eq!(CliError::BuiltinRootNotFound.exit_code(), 1);
    }

    #[test]
    fn core_suggestions_surface_through_cli_error() {
        let err: CliError = HexgenError::from(DomainError::InvalidName {
            name: "user-account".into(),
            expected: "PascalCase or snake_case",
        })
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("user_account")));
    }

    #[test]
    fn plain_format_lists_suggestions() {
        let err = CliError::BuiltinRootNotFound;
        let out = err.format_plain(false);
        assert!(out.contains("Suggestions:"));
        assert!(out.contains("HEXGEN_BUILTIN_ROOT"));
    }
}
