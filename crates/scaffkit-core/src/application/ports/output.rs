//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scaffkit_adapters::filesystem::LocalFilesystem` (production)
/// - `scaffkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Adapters report failures as `ApplicationError::Filesystem` carrying the
/// original `io::Error`, so callers can still match on its kind.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory. Fails with `AlreadyExists` if the path
    /// is taken and `NotFound` if the parent is missing.
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
