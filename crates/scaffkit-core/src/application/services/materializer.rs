//! Writes a [`GeneratedFileSet`] under a fresh target directory.
//!
//! The target is created with a non-recursive `create_dir`, so an existing
//! directory is detected by the filesystem itself and nothing is written.
//! After that, writes are sequential and **not transactional**: if the
//! third file fails, the first two stay on disk. There is no rollback.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{GeneratedFileSet, TargetDirectory},
    error::{ScaffoldError, ScaffoldResult},
};

pub struct FileMaterializer {
    filesystem: Box<dyn Filesystem>,
}

impl FileMaterializer {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Fail with `TargetExists` if anything already sits at the target.
    pub fn ensure_absent(&self, target: &TargetDirectory) -> ScaffoldResult<()> {
        if self.filesystem.exists(&target.path()) {
            return Err(ApplicationError::TargetExists {
                path: target.relative().to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Create the target directory and write every file into it.
    ///
    /// Returns the full paths written, in write order.
    #[instrument(skip_all, fields(target = %target.display(), files = files.len()))]
    pub fn materialize(
        &self,
        target: &TargetDirectory,
        files: &GeneratedFileSet,
    ) -> ScaffoldResult<Vec<PathBuf>> {
        let root = target.path();

        if let Some(parent) = root.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.create_target(&root, target)?;

        let mut written = Vec::with_capacity(files.len());
        for (relative, content) in files.iter() {
            let path = root.join(relative);
            if let Err(e) = self.write_entry(&root, &path, content) {
                warn!(
                    path = %path.display(),
                    written = written.len(),
                    "Write failed; earlier files were left in place"
                );
                return Err(match e {
                    ScaffoldError::Application(app) => app.after_writes(written.len()).into(),
                    other => other,
                });
            }
            debug!(path = %relative, bytes = content.len(), "Wrote file");
            written.push(path);
        }

        Ok(written)
    }

    fn create_target(&self, root: &Path, target: &TargetDirectory) -> ScaffoldResult<()> {
        self.filesystem.create_dir(root).map_err(|e| match e {
            ScaffoldError::Application(ref app)
                if app.io_kind() == Some(io::ErrorKind::AlreadyExists) =>
            {
                ApplicationError::TargetExists {
                    path: target.relative().to_path_buf(),
                }
                .into()
            }
            other => other,
        })
    }

    fn write_entry(&self, root: &Path, path: &Path, content: &str) -> ScaffoldResult<()> {
        // Paths in a GeneratedFileSet are already relative and `..`-free,
        // so the parent always sits inside `root`.
        if let Some(parent) = path.parent().filter(|p| *p != root) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }
}
