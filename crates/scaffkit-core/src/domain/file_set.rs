use std::collections::BTreeMap;
use std::path::{Component, Path};

use crate::domain::error::DomainError;

/// The files a generator produced, keyed by path relative to the package
/// directory.
///
/// This is the output of the template registry. It contains no behaviour
/// beyond upholding its own invariants:
/// - keys never collide,
/// - keys are relative and never climb out of the package (`..`).
///
/// Keys use `/` separators regardless of platform and may name nested
/// directories (`src/index.ts`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFileSet {
    files: BTreeMap<String, String>,
}

impl GeneratedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        let path = path.into();
        validate_relative(&path)?;

        if self.files.contains_key(&path) {
            return Err(DomainError::DuplicatePath { path });
        }

        self.files.insert(path, content.into());
        Ok(())
    }

    pub fn with_file(
        mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.insert(path, content)?;
        Ok(self)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a GeneratedFileSet {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

fn validate_relative(path: &str) -> Result<(), DomainError> {
    let as_path = Path::new(path);

    if path.starts_with('/') || as_path.is_absolute() {
        return Err(DomainError::AbsolutePathNotAllowed { path: path.into() });
    }

    for component in as_path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(DomainError::PathEscapesRoot { path: path.into() });
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(DomainError::AbsolutePathNotAllowed { path: path.into() });
            }
        }
    }

    if as_path.file_name().is_none() {
        return Err(DomainError::PathEscapesRoot { path: path.into() });
    }

    Ok(())
}
