//! Error handling for the `scaffold-package` binary.
//!
//! Every failure ends up here as a [`CliError`], which knows:
//! - the message shown to the user
//! - whether the usage block follows it
//! - the suggestions printed underneath
//! - the exit code handed to the OS

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::Level;

use scaffkit_adapters::EnvLoaderError;
use scaffkit_core::error::{ErrorCategory as CoreCategory, ScaffoldError};

use crate::cli::{self, ParseError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The argument list could not be folded into an invocation.
    #[error(transparent)]
    Usage(#[from] ParseError),

    #[error("Missing package name.")]
    MissingName,

    /// An error propagated from `scaffkit-core`.
    #[error(transparent)]
    Core(#[from] ScaffoldError),

    /// `.env` layers could not be read or failed validation.
    #[error(transparent)]
    Environment(#[from] EnvLoaderError),

    /// A configuration file could not be read, parsed, or validated.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// An I/O operation outside materialization failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Usage(_) | Self::MissingName => vec![],
            Self::Core(core) => core.suggestions(),
            Self::Environment(EnvLoaderError::File { path, .. }) => vec![
                format!("Check the syntax of {}", path.display()),
                "Lines must look like KEY=value".into(),
            ],
            Self::Environment(EnvLoaderError::Validation(_)) => vec![
                "Fix or unset the variables listed above".into(),
                "Values may come from .env, .env.local or .env.<NODE_ENV> files".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Check scaffkit.toml in the workspace root".into(),
                "Check SCAFFKIT_* environment variables".into(),
            ],
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Check that the current directory still exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Usage(_) | Self::MissingName => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Io => ErrorCategory::Io,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Environment(_) | Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Io,
        }
    }

    /// Whether the usage block is printed after the message.
    pub fn shows_usage(&self) -> bool {
        match self {
            Self::Usage(_) | Self::MissingName => true,
            Self::Core(core) => core.category() == CoreCategory::Validation,
            _ => false,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  1   |
    /// | Internal      |  70  |
    /// | I/O           |  74  |
    /// | Configuration |  78  |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 1,
            ErrorCategory::Internal => 70,
            ErrorCategory::Io => 74,
            ErrorCategory::Configuration => 78,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = format!("{} {}\n", "\u{2717}".red().bold(), self.to_string().red());

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "\u{2192}".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        if self.shows_usage() {
            output.push('\n');
            output.push_str(&cli::usage());
            return output;
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`]; no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("{self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        if self.shows_usage() {
            out.push('\n');
            out.push_str(&cli::usage());
            return out;
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Level the error is logged at. User errors are already printed in
    /// full on stderr, so they only show up with `-vv`.
    pub fn log_level(&self) -> Level {
        match self.category() {
            ErrorCategory::UserError => Level::DEBUG,
            ErrorCategory::Configuration | ErrorCategory::Io | ErrorCategory::Internal => {
                Level::ERROR
            }
        }
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        if self.log_level() == Level::DEBUG {
            tracing::debug!("User error: {}", self);
        } else {
            match self.category() {
                ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
                ErrorCategory::Io => tracing::error!("I/O error: {}", self),
                _ => tracing::error!("Internal error: {}", self),
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments, invalid names, or a target that already exists.
    UserError,
    /// Configuration files or environment variables.
    Configuration,
    /// Filesystem failures.
    Io,
    /// A bug.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffkit_core::application::ApplicationError;
    use scaffkit_core::domain::{DomainError, EnvIssue, EnvValidationError};
    use std::io;
    use std::path::PathBuf;

    fn target_exists() -> CliError {
        CliError::Core(ScaffoldError::from(ApplicationError::TargetExists {
            path: PathBuf::from("packages/widgets"),
        }))
    }

    fn invalid_name() -> CliError {
        CliError::Core(ScaffoldError::from(DomainError::InvalidIdentifier {
            name: "Bad_Name".into(),
        }))
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn usage_errors_exit_one() {
        assert_eq!(CliError::MissingName.exit_code(), 1);
        assert_eq!(
            CliError::from(ParseError::UnknownOption("--x".into())).exit_code(),
            1
        );
        assert_eq!(invalid_name().exit_code(), 1);
    }

    #[test]
    fn existing_target_exits_one() {
        assert_eq!(target_exists().exit_code(), 1);
    }

    #[test]
    fn materialization_failure_exits_io() {
        let err = CliError::Core(ScaffoldError::from(ApplicationError::io(
            "/repo/packages/a/README.md",
            "write",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        )));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn env_validation_exits_config() {
        let err = CliError::Environment(EnvLoaderError::Validation(EnvValidationError {
            issues: vec![EnvIssue {
                path: "PORT".into(),
                message: "expected an integer".into(),
            }],
        }));
        assert_eq!(err.exit_code(), 78);
        assert_eq!(CliError::config("bad").exit_code(), 78);
    }

    #[test]
    fn user_errors_stay_below_the_default_log_level() {
        assert_eq!(CliError::MissingName.log_level(), Level::DEBUG);
        assert_eq!(invalid_name().log_level(), Level::DEBUG);
        assert_eq!(target_exists().log_level(), Level::DEBUG);
        assert_eq!(CliError::config("bad").log_level(), Level::ERROR);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn usage_errors_print_message_then_usage() {
        let s = CliError::MissingName.format_plain(false);
        assert!(s.starts_with("Missing package name.\n\nUsage: scaffold-package"));
        assert!(!s.contains("Suggestions:"));
    }

    #[test]
    fn invalid_name_prints_usage() {
        let s = invalid_name().format_plain(false);
        assert!(s.starts_with("Invalid package name \"Bad_Name\"."));
        assert!(s.contains("Usage:"));
    }

    #[test]
    fn conflict_prints_suggestions_not_usage() {
        let s = target_exists().format_plain(false);
        assert!(s.starts_with("Target already exists: packages/widgets\n"));
        assert!(s.contains("Suggestions:"));
        assert!(!s.contains("Usage:"));
    }

    #[test]
    fn verbose_includes_cause_chain() {
        let err = CliError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.format_plain(true).contains("Caused by: gone"));
        assert!(!err.format_plain(false).contains("Caused by"));
    }

    #[test]
    fn colored_keeps_message_text() {
        let s = target_exists().format_colored(false);
        assert!(s.contains("packages/widgets"));
    }
}
