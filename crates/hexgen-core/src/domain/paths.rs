//! Path construction for generated modules and built-in apps.
//!
//! All paths are derived from a target root plus a module name; nothing here
//! touches the filesystem. Path layout is part of the domain contract: every
//! generated module lives under `<target_root>/src/<module>/`.

use std::path::{Path, PathBuf};

use crate::domain::naming::ModuleName;

/// Layer directories created for every module, in creation order.
///
/// The empty string is the module root itself. `application/use_cases` gets
/// its `__init__.py` rendered from a template rather than written empty.
pub const MODULE_DIRECTORIES: [&str; 5] = [
    "",
    "application",
    "domain",
    "infrastructure",
    "application/use_cases",
];

/// Builds paths inside a single generated module.
#[derive(Debug, Clone)]
pub struct ModulePaths {
    target_root: PathBuf,
    module_dir: String,
}

impl ModulePaths {
    /// Paths for the module named by `name`, rooted at `target_root`.
    ///
    /// The module directory is the snake_case form of the name.
    pub fn new(target_root: impl Into<PathBuf>, name: &ModuleName) -> Self {
        Self {
            target_root: target_root.into(),
            module_dir: name.snake().to_string(),
        }
    }

    /// `<target_root>/src/<module>/`
    pub fn module_root(&self) -> PathBuf {
        self.target_root.join("src").join(&self.module_dir)
    }

    /// A path inside the module. An empty `relative` yields the module root.
    pub fn join(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.module_root()
        } else {
            self.module_root().join(relative)
        }
    }

    /// `__init__.py` marker for a layer directory.
    pub fn init_file(&self, directory: &str) -> PathBuf {
        self.join(directory).join("__init__.py")
    }

    /// `application/use_cases/` inside the module.
    pub fn use_cases_dir(&self) -> PathBuf {
        self.join("application/use_cases")
    }

    /// `application/use_cases/__init__.py`
    pub fn use_case_init(&self) -> PathBuf {
        self.use_cases_dir().join("__init__.py")
    }

    /// `application/use_cases/<action>.py`
    pub fn use_case_file(&self, action: &str) -> PathBuf {
        self.use_cases_dir().join(format!("{action}.py"))
    }
}

/// Builds source and target paths for built-in app copying.
#[derive(Debug, Clone)]
pub struct BuiltinPaths {
    source_root: PathBuf,
}

impl BuiltinPaths {
    /// Paths rooted at `source_root`, the on-disk tree holding built-in apps
    /// and the base project skeleton.
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// `<source_root>/<relative>`
    pub fn source(&self, relative: &str) -> PathBuf {
        self.source_root.join(relative)
    }

    /// `<target_root>/<relative>`, mirroring the source layout.
    pub fn target(&self, target_root: &Path, relative: &str) -> PathBuf {
        target_root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ModulePaths {
        let name = ModuleName::parse("UserAccount").unwrap();
        ModulePaths::new("/project", &name)
    }

    #[test]
    fn module_root_uses_snake_case() {
        assert_eq!(
            paths().module_root(),
            PathBuf::from("/project/src/user_account")
        );
    }

    #[test]
    fn empty_relative_is_module_root() {
        let p = paths();
        assert_eq!(p.join(""), p.module_root());
    }

    #[test]
    fn layer_paths_nest_under_module() {
        let p = paths();
        assert_eq!(
            p.join("application/service.py"),
            PathBuf::from("/project/src/user_account/application/service.py")
        );
        assert_eq!(
            p.init_file("domain"),
            PathBuf::from("/project/src/user_account/domain/__init__.py")
        );
    }

    #[test]
    fn use_case_paths() {
        let p = paths();
        assert_eq!(
            p.use_case_init(),
            PathBuf::from("/project/src/user_account/application/use_cases/__init__.py")
        );
        assert_eq!(
            p.use_case_file("create"),
            PathBuf::from("/project/src/user_account/application/use_cases/create.py")
        );
    }

    #[test]
    fn builtin_paths_mirror_layout() {
        let b = BuiltinPaths::new("/assets/builtin_apps");
        assert_eq!(
            b.source("src/user/domain/models.py"),
            PathBuf::from("/assets/builtin_apps/src/user/domain/models.py")
        );
        assert_eq!(
            b.target(Path::new("/project"), "src/user/domain/models.py"),
            PathBuf::from("/project/src/user/domain/models.py")
        );
    }
}
