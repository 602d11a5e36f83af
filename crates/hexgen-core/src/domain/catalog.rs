//! Catalog of built-in applications available for copying.

use crate::domain::error::DomainError;

/// The set of built-in apps that can be installed into a project.
///
/// Validation runs before any filesystem access, so an unknown app name
/// never produces a partial copy.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    apps: Vec<String>,
}

impl BuiltinCatalog {
    pub fn new<I, S>(apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            apps: apps.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, app: &str) -> bool {
        self.apps.iter().any(|a| a == app)
    }

    /// Validate an app name against the catalog.
    pub fn validate(&self, app: &str) -> Result<(), DomainError> {
        if self.contains(app) {
            Ok(())
        } else {
            Err(DomainError::UnknownApp {
                app: app.to_string(),
                available: self.apps.join(", "),
            })
        }
    }
}

impl Default for BuiltinCatalog {
    /// The shipped apps: user, role, auth, smtp.
    fn default() -> Self {
        Self::new(["user", "role", "auth", "smtp"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_contents() {
        let catalog = BuiltinCatalog::default();
        for app in ["user", "role", "auth", "smtp"] {
            assert!(catalog.contains(app), "missing {app}");
        }
        assert!(!catalog.contains("blog"));
    }

    #[test]
    fn unknown_app_error_lists_available() {
        let err = BuiltinCatalog::default().validate("blog").unwrap_err();
        match err {
            DomainError::UnknownApp { app, available } => {
                assert_eq!(app, "blog");
                assert!(available.contains("smtp"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
