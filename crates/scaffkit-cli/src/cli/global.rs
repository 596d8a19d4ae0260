//! Flags that apply to every invocation regardless of what is being
//! scaffolded.

use std::path::PathBuf;

/// Global arguments for all invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// `-v` count: 1 = info, 2 = debug, 3+ = trace.
    pub verbose: u8,
    /// Suppress all non-error output.
    pub quiet: bool,
    /// Disable ANSI colour codes.
    pub no_color: bool,
    /// Extra configuration file layered above the repository config.
    pub config: Option<PathBuf>,
}
