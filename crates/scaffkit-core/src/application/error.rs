//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Business rule errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a package.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The target directory was already on disk before we started.
    #[error("Target already exists: {}", .path.display())]
    TargetExists { path: PathBuf },

    /// A filesystem operation failed. The original error is kept intact.
    ///
    /// `written` counts the package files already on disk when it failed.
    #[error("Failed to {operation} {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        operation: &'static str,
        written: usize,
        #[source]
        source: io::Error,
    },
}

impl ApplicationError {
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            operation,
            written: 0,
            source,
        }
    }

    /// Record how many files were written before this failure.
    pub fn after_writes(self, count: usize) -> Self {
        match self {
            Self::Filesystem {
                path,
                operation,
                source,
                ..
            } => Self::Filesystem {
                path,
                operation,
                written: count,
                source,
            },
            other => other,
        }
    }

    /// The `io::ErrorKind` behind a filesystem failure, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Filesystem { source, .. } => Some(source.kind()),
            Self::TargetExists { .. } => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TargetExists { path } => vec![
                "Choose a different package name".into(),
                format!(
                    "{} was left untouched; it has to be moved away before this name can be reused",
                    path.display()
                ),
            ],
            Self::Filesystem { path, written, .. } => {
                let mut suggestions = vec![
                    format!("Failed to access: {}", path.display()),
                    "Check that you have write permissions".into(),
                ];
                if *written > 0 {
                    suggestions.push(format!(
                        "{written} file(s) written before the failure were left in place"
                    ));
                }
                suggestions
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TargetExists { .. } => ErrorCategory::Conflict,
            Self::Filesystem { .. } => ErrorCategory::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denied() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn target_exists_suggestions_are_not_destructive() {
        let err = ApplicationError::TargetExists {
            path: PathBuf::from("packages/widgets"),
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().all(|s| !s.contains("rm ")));
        assert!(suggestions.iter().any(|s| s.contains("packages/widgets")));
    }

    #[test]
    fn failure_before_any_write_does_not_mention_leftovers() {
        let err = ApplicationError::io("/repo/packages", "create directory", denied());
        assert!(
            err.suggestions()
                .iter()
                .all(|s| !s.contains("left in place"))
        );
    }

    #[test]
    fn failure_after_writes_mentions_leftovers() {
        let err =
            ApplicationError::io("/repo/packages/a/README.md", "write file", denied()).after_writes(2);
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.starts_with("2 file(s) written"))
        );
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn after_writes_leaves_target_exists_alone() {
        let err = ApplicationError::TargetExists {
            path: PathBuf::from("packages/a"),
        }
        .after_writes(3);
        assert!(matches!(err, ApplicationError::TargetExists { .. }));
    }
}
