//! In-memory filesystem adapter for testing.
//!
//! Mirrors `std::fs` semantics closely enough for the materializer:
//! `create_dir` fails on an existing path or a missing parent, and writes
//! need their parent directory. Individual paths can be marked to fail so
//! partial-write behaviour is observable.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use scaffkit_core::{
    application::ApplicationError,
    error::ScaffoldResult,
    prelude::Filesystem,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    failing_writes: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-create a directory and its ancestors.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.write().insert_ancestors(path.as_ref());
        self
    }

    /// Make every write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_to(self, path: impl Into<PathBuf>) -> Self {
        self.write().failing_writes.insert(path.into());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.read().files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.read().directories.contains(path)
    }

    // A poisoned lock only means another test thread panicked mid-write;
    // the maps are still usable.
    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl MemoryFilesystemInner {
    fn insert_ancestors(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn has_parent(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

fn fs_error(path: &Path, operation: &'static str, kind: io::ErrorKind) -> ApplicationError {
    ApplicationError::io(path, operation, io::Error::from(kind))
}

impl Filesystem for MemoryFilesystem {
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.write();

        if inner.exists(path) {
            return Err(fs_error(path, "create directory", io::ErrorKind::AlreadyExists).into());
        }
        if !inner.has_parent(path) {
            return Err(fs_error(path, "create directory", io::ErrorKind::NotFound).into());
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.write();

        if inner.files.contains_key(path) {
            return Err(fs_error(path, "create directory", io::ErrorKind::AlreadyExists).into());
        }

        inner.insert_ancestors(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.write();

        if inner.failing_writes.contains(path) {
            return Err(fs_error(path, "write file", io::ErrorKind::PermissionDenied).into());
        }
        if !inner.has_parent(path) {
            return Err(fs_error(path, "write file", io::ErrorKind::NotFound).into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read().exists(path)
    }
}
