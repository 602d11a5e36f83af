//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use hexgen_core::{
    application::{ApplicationError, ports::FileHandler},
    error::{HexgenError, HexgenResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so one instance can be handed to several services
/// while the test keeps its own handle for assertions. Mutating operations
/// are counted, which lets tests assert that a rejected request performed
/// zero writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileHandler {
    inner: Arc<RwLock<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    mutations: usize,
}

impl MemoryFileHandler {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.read();
        inner.files.keys().cloned().collect()
    }

    /// Number of mutating operations performed so far.
    pub fn mutation_count(&self) -> usize {
        self.read().mutations
    }

    /// Pre-populate a file, bypassing the port (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let mut inner = self.write_lock();
        let path = path.into();
        if let Some(parent) = path.parent() {
            Self::insert_dirs(&mut inner, parent);
        }
        inner.files.insert(path, contents.into());
    }

    /// Pre-populate a directory, bypassing the port (testing helper).
    pub fn seed_directory(&self, path: impl Into<PathBuf>) {
        let mut inner = self.write_lock();
        Self::insert_dirs(&mut inner, &path.into());
    }

    fn insert_dirs(inner: &mut MemoryInner, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, MemoryInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, MemoryInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileHandler for MemoryFileHandler {
    fn create_directory(&self, path: &Path) -> HexgenResult<bool> {
        let mut inner = self.write_lock();
        if inner.files.contains_key(path) {
            return Err(conflict(path, "directory"));
        }
        if inner.directories.contains(path) {
            return Ok(false);
        }
        Self::insert_dirs(&mut inner, path);
        inner.mutations += 1;
        Ok(true)
    }

    fn write_file(&self, path: &Path, contents: &str, overwrite: bool) -> HexgenResult<bool> {
        let mut inner = self.write_lock();
        if inner.directories.contains(path) {
            return Err(conflict(path, "file"));
        }
        if inner.files.contains_key(path) && !overwrite {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            Self::insert_dirs(&mut inner, parent);
        }
        inner.files.insert(path.to_path_buf(), contents.to_string());
        inner.mutations += 1;
        Ok(true)
    }

    fn copy_file(&self, source: &Path, target: &Path, overwrite: bool) -> HexgenResult<bool> {
        let contents = {
            let inner = self.read();
            match inner.files.get(source) {
                Some(c) => c.clone(),
                None => {
                    return Err(ApplicationError::SourceMissing {
                        path: source.to_path_buf(),
                    }
                    .into());
                }
            }
        };
        self.write_file(target, &contents, overwrite)
    }

    fn copy_directory(&self, source: &Path, target: &Path, overwrite: bool) -> HexgenResult<bool> {
        let mut inner = self.write_lock();
        if !inner.directories.contains(source) {
            return Err(ApplicationError::SourceMissing {
                path: source.to_path_buf(),
            }
            .into());
        }
        let target_exists =
            inner.directories.contains(target) || inner.files.contains_key(target);
        if target_exists {
            if !overwrite {
                return Ok(false);
            }
            inner.directories.retain(|p| !p.starts_with(target));
            inner.files.retain(|p, _| !p.starts_with(target));
        }

        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(source))
            .map(|p| target.join(p.strip_prefix(source).unwrap_or(p)))
            .collect();
        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter(|(p, _)| p.starts_with(source))
            .map(|(p, c)| (target.join(p.strip_prefix(source).unwrap_or(p)), c.clone()))
            .collect();

        for dir in dirs {
            Self::insert_dirs(&mut inner, &dir);
        }
        for (path, contents) in files {
            inner.files.insert(path, contents);
        }
        inner.mutations += 1;
        Ok(true)
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.read().files.contains_key(path)
    }

    fn directory_exists(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }
}

fn conflict(path: &Path, expected: &'static str) -> HexgenError {
    ApplicationError::PathTypeConflict {
        path: path.to_path_buf(),
        expected,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_skip_preserves_first_contents() {
        let fs = MemoryFileHandler::new();
        let path = Path::new("/p/src/a.py");

        assert!(fs.write_file(path, "one", false).unwrap());
        assert!(!fs.write_file(path, "two", false).unwrap());
        assert_eq!(fs.read_file(path).as_deref(), Some("one"));
    }

    #[test]
    fn skipped_write_does_not_count_as_mutation() {
        let fs = MemoryFileHandler::new();
        let path = Path::new("/p/a.py");
        fs.write_file(path, "x", false).unwrap();
        let before = fs.mutation_count();
        fs.write_file(path, "y", false).unwrap();
        assert_eq!(fs.mutation_count(), before);
    }

    #[test]
    fn directory_blocks_file_write() {
        let fs = MemoryFileHandler::new();
        fs.create_directory(Path::new("/p/dir")).unwrap();
        assert!(fs.write_file(Path::new("/p/dir"), "x", false).is_err());
    }

    #[test]
    fn copy_directory_mirrors_tree() {
        let fs = MemoryFileHandler::new();
        fs.seed_file("/assets/src/user/models.py", "m");
        fs.seed_file("/assets/src/user/api/routes.py", "r");

        assert!(
            fs.copy_directory(
                Path::new("/assets/src/user"),
                Path::new("/project/src/user"),
                false
            )
            .unwrap()
        );
        assert_eq!(
            fs.read_file(Path::new("/project/src/user/api/routes.py"))
                .as_deref(),
            Some("r")
        );
    }

    #[test]
    fn copy_directory_skip_leaves_target_untouched() {
        let fs = MemoryFileHandler::new();
        fs.seed_file("/assets/src/user/models.py", "new");
        fs.seed_file("/project/src/user/old.py", "old");

        let copied = fs
            .copy_directory(
                Path::new("/assets/src/user"),
                Path::new("/project/src/user"),
                false,
            )
            .unwrap();
        assert!(!copied);
        assert!(fs.read_file(Path::new("/project/src/user/models.py")).is_none());
        assert_eq!(
            fs.read_file(Path::new("/project/src/user/old.py")).as_deref(),
            Some("old")
        );
    }

    #[test]
    fn copy_directory_overwrite_replaces_target() {
        let fs = MemoryFileHandler::new();
        fs.seed_file("/assets/src/user/models.py", "new");
        fs.seed_file("/project/src/user/old.py", "old");

        assert!(
            fs.copy_directory(
                Path::new("/assets/src/user"),
                Path::new("/project/src/user"),
                true
            )
            .unwrap()
        );
        assert!(fs.read_file(Path::new("/project/src/user/old.py")).is_none());
        assert_eq!(
            fs.read_file(Path::new("/project/src/user/models.py"))
                .as_deref(),
            Some("new")
        );
    }
}
