use std::path::{Path, PathBuf};

use crate::domain::identifier::Identifier;

/// Where a new package lands: `<workspace root>/<packages dir>/<name>`.
///
/// Keeps the workspace-relative form around so messages read
/// `packages/widgets` instead of an absolute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    workspace_root: PathBuf,
    relative: PathBuf,
}

impl TargetDirectory {
    pub fn new(
        workspace_root: impl Into<PathBuf>,
        packages_dir: impl AsRef<Path>,
        name: &Identifier,
    ) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            relative: packages_dir.as_ref().join(name.as_str()),
        }
    }

    /// Full path, used for I/O.
    pub fn path(&self) -> PathBuf {
        self.workspace_root.join(&self.relative)
    }

    /// Path relative to the workspace root (absolute if the packages dir was).
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn display(&self) -> String {
        self.relative.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_root_packages_dir_and_name() {
        let name = Identifier::parse("widgets").unwrap();
        let target = TargetDirectory::new("/repo", "packages", &name);
        assert_eq!(target.path(), PathBuf::from("/repo/packages/widgets"));
        assert_eq!(target.relative(), Path::new("packages/widgets"));
    }

    #[test]
    fn absolute_packages_dir_ignores_root() {
        let name = Identifier::parse("widgets").unwrap();
        let target = TargetDirectory::new("/repo", "/elsewhere/libs", &name);
        assert_eq!(target.path(), PathBuf::from("/elsewhere/libs/widgets"));
    }
}
