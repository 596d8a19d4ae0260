use thiserror::Error;

/// Root domain error type.
///
/// Every variant describes a rule the request or the generated file set
/// broke. None of them involve I/O.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid package name \"{name}\". Use kebab-case (letters, numbers, dashes).")]
    InvalidIdentifier { name: String },

    #[error("Invalid package type \"{value}\". Valid values: {valid}.")]
    UnknownPackageKind { value: String, valid: String },

    // ========================================================================
    // File set invariants
    // ========================================================================
    #[error("Duplicate path in generated file set: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the package directory: {path}")]
    PathEscapesRoot { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { .. } => vec![
                "Use lowercase letters and digits separated by single dashes".into(),
                "Examples: logger, ui, commitlint-config".into(),
            ],
            Self::UnknownPackageKind { valid, .. } => {
                vec![format!("Pick one of: {valid}")]
            }
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => vec![
                "A generator produced an invalid file set".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidIdentifier { .. } | Self::UnknownPackageKind { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
