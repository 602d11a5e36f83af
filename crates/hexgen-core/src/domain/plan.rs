//! Action sets, template bindings, and the generation plan.
//!
//! A [`GenerationPlan`] is the full set of directories and fully rendered
//! files a run would produce. Services build the plan first and execute it
//! second, so a dry run can show exactly what a real run would do without
//! touching the filesystem.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::naming::ModuleName;

/// The full CRUD action vocabulary, in generation order.
pub const DEFAULT_ACTIONS: [&str; 5] = ["create", "list", "retrieve", "update", "delete"];

/// A validated, ordered set of CRUD actions.
///
/// Order is preserved as given; duplicates are kept. Every member is
/// guaranteed to come from [`DEFAULT_ACTIONS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet {
    actions: Vec<String>,
}

impl ActionSet {
    /// All five CRUD actions.
    pub fn all() -> Self {
        Self {
            actions: DEFAULT_ACTIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// A subset chosen by the user.
    ///
    /// Fails on an empty list or on any action outside the known vocabulary.
    /// Validation happens here, before any plan is built.
    pub fn new<I, S>(actions: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let actions: Vec<String> = actions.into_iter().map(Into::into).collect();
        if actions.is_empty() {
            return Err(DomainError::EmptyActionSet);
        }
        for action in &actions {
            if !DEFAULT_ACTIONS.contains(&action.as_str()) {
                return Err(DomainError::UnknownAction {
                    action: action.clone(),
                    known: DEFAULT_ACTIONS.join(", "),
                });
            }
        }
        Ok(Self { actions })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for ActionSet {
    fn default() -> Self {
        Self::all()
    }
}

/// A template bound to its output location inside a module.
#[derive(Debug, Clone)]
pub struct TemplateSpec {
    /// Output path relative to the module root, e.g. `application/service.py`.
    pub relative_path: String,
    /// Template source text.
    pub template: String,
}

impl TemplateSpec {
    pub fn new(relative_path: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            template: template.into(),
        }
    }
}

/// Variables available to templates.
///
/// The context is built once per run from the frozen [`ModuleName`] and
/// [`ActionSet`]; per-action renders add the `action` field on top.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub model_pascal_case: String,
    pub model_snake_case: String,
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl RenderContext {
    pub fn new(name: &ModuleName, actions: &ActionSet) -> Self {
        Self {
            model_pascal_case: name.pascal().to_string(),
            model_snake_case: name.snake().to_string(),
            actions: actions.as_slice().to_vec(),
            action: None,
        }
    }

    /// The same context with `action` set, for per-action use case files.
    pub fn for_action(&self, action: &str) -> Self {
        Self {
            action: Some(action.to_string()),
            ..self.clone()
        }
    }
}

/// A fully rendered file awaiting write.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl PlannedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Everything a generation run will create, in creation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationPlan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl GenerationPlan {
    pub fn push_directory(&mut self, path: impl Into<PathBuf>) {
        self.directories.push(path.into());
    }

    pub fn push_file(&mut self, file: PlannedFile) {
        self.files.push(file);
    }

    /// Reject plans that would write the same file twice or create nothing.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyPlan);
        }
        let mut seen = BTreeSet::new();
        for file in &self.files {
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_actions_in_order() {
        let set = ActionSet::all();
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec!["create", "list", "retrieve", "update", "delete"]
        );
    }

    #[test]
    fn subset_preserves_given_order() {
        let set = ActionSet::new(["list", "create"]).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["list", "create"]);
    }

    #[test]
    fn unknown_action_rejected() {
        let err = ActionSet::new(["create", "archive"]).unwrap_err();
        assert!(matches!(err, DomainError::UnknownAction { ref action, .. } if action == "archive"));
    }

    #[test]
    fn empty_action_list_rejected() {
        let err = ActionSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, DomainError::EmptyActionSet));
    }

    #[test]
    fn context_for_action_keeps_base_fields() {
        let name = ModuleName::parse("Order").unwrap();
        let ctx = RenderContext::new(&name, &ActionSet::all());
        assert!(ctx.action.is_none());

        let per = ctx.for_action("create");
        assert_eq!(per.action.as_deref(), Some("create"));
        assert_eq!(per.model_pascal_case, "Order");
        assert_eq!(per.model_snake_case, "order");
        assert_eq!(per.actions.len(), 5);
    }

    #[test]
    fn plan_rejects_duplicate_paths() {
        let mut plan = GenerationPlan::default();
        plan.push_file(PlannedFile::new("/p/src/a.py", "x"));
        plan.push_file(PlannedFile::new("/p/src/a.py", "y"));
        let err = plan.validate().unwrap_err();
        assert!(matches!(err, DomainError::DuplicatePath { .. }));
    }

    #[test]
    fn plan_rejects_emptiness() {
        let plan = GenerationPlan::default();
        assert!(matches!(plan.validate(), Err(DomainError::EmptyPlan)));
    }

    #[test]
    fn plan_with_only_directories_is_valid() {
        let mut plan = GenerationPlan::default();
        plan.push_directory("/p/src/order");
        assert!(plan.validate().is_ok());
    }
}
