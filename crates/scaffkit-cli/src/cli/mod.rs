//! Argument parsing.
//!
//! This module is the *only* place that knows about flag names, usage
//! text and help. Parsing is a left-to-right fold over the tokens: the
//! accumulator holds the invocation built so far plus the flag (if any)
//! still waiting for its value. The first failing token aborts the fold;
//! `--help` aborts it successfully, so tokens after it are never looked at.

use std::path::PathBuf;

use scaffkit_core::domain::PackageKind;
use thiserror::Error;

pub mod global;
pub use global::GlobalArgs;

pub const BIN_NAME: &str = "scaffold-package";

/// The result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Help,
    Version,
    Run(Invocation),
}

/// Raw, unvalidated request as typed on the command line.
///
/// `name` and `kind` are checked against the domain rules by the
/// orchestrator, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: Option<String>,
    pub kind: String,
    pub description: Option<String>,
    pub dry_run: bool,
    pub global: GlobalArgs,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            name: None,
            kind: PackageKind::default().as_str().to_string(),
            description: None,
            dry_run: false,
            global: GlobalArgs::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing value for {0}.")]
    MissingValue(&'static str),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected extra argument: {0}")]
    UnexpectedArgument(String),
}

/// Flags that take a value, either as the next token or after `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueFlag {
    Type,
    Description,
    Config,
}

impl ValueFlag {
    const ALL: [ValueFlag; 3] = [Self::Type, Self::Description, Self::Config];

    const fn name(self) -> &'static str {
        match self {
            Self::Type => "--type",
            Self::Description => "--description",
            Self::Config => "--config",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == token)
    }

    /// `--type=react-library` → `(Type, "react-library")`.
    fn split_inline(token: &str) -> Option<(Self, &str)> {
        let (flag, value) = token.split_once('=')?;
        Self::from_token(flag).map(|flag| (flag, value))
    }

    fn apply(self, invocation: &mut Invocation, value: &str) -> Result<(), ParseError> {
        match self {
            Self::Type => invocation.kind = value.to_string(),
            Self::Description => invocation.description = Some(value.to_string()),
            Self::Config => {
                if value.is_empty() {
                    return Err(ParseError::MissingValue(self.name()));
                }
                invocation.global.config = Some(PathBuf::from(value));
            }
        }
        Ok(())
    }
}

/// Why the fold stopped early.
enum Stop {
    Help,
    Version,
    Failed(ParseError),
}

impl From<ParseError> for Stop {
    fn from(err: ParseError) -> Self {
        Self::Failed(err)
    }
}

#[derive(Default)]
struct Accumulator {
    invocation: Invocation,
    pending: Option<ValueFlag>,
}

impl Accumulator {
    fn step(mut self, token: &str) -> Result<Self, Stop> {
        if let Some(flag) = self.pending.take() {
            if token.is_empty() {
                return Err(ParseError::MissingValue(flag.name()).into());
            }
            flag.apply(&mut self.invocation, token)?;
            return Ok(self);
        }

        let global = &mut self.invocation.global;
        match token {
            "--help" | "-h" => return Err(Stop::Help),
            "--version" | "-V" => return Err(Stop::Version),
            "--dry-run" => self.invocation.dry_run = true,
            "--quiet" | "-q" => global.quiet = true,
            "--no-color" => global.no_color = true,
            "--verbose" => global.verbose = global.verbose.saturating_add(1),
            _ if is_verbose_cluster(token) => {
                let count = u8::try_from(token.len() - 1).unwrap_or(u8::MAX);
                global.verbose = global.verbose.saturating_add(count);
            }
            _ => {
                if let Some(flag) = ValueFlag::from_token(token) {
                    self.pending = Some(flag);
                } else if let Some((flag, value)) = ValueFlag::split_inline(token) {
                    flag.apply(&mut self.invocation, value)?;
                } else if token.starts_with('-') {
                    return Err(ParseError::UnknownOption(token.to_string()).into());
                } else if self.invocation.name.is_some() {
                    return Err(ParseError::UnexpectedArgument(token.to_string()).into());
                } else {
                    self.invocation.name = Some(token.to_string());
                }
            }
        }

        Ok(self)
    }
}

/// `-v`, `-vv`, `-vvv`, ...
fn is_verbose_cluster(token: &str) -> bool {
    token
        .strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b == b'v'))
}

/// Parse the tokens that follow the program name.
pub fn parse_args<I, S>(args: I) -> Result<Parsed, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let folded = args
        .into_iter()
        .try_fold(Accumulator::default(), |acc, token| acc.step(token.as_ref()));

    match folded {
        Ok(Accumulator {
            pending: Some(flag),
            ..
        }) => Err(ParseError::MissingValue(flag.name())),
        Ok(acc) => Ok(Parsed::Run(acc.invocation)),
        Err(Stop::Help) => Ok(Parsed::Help),
        Err(Stop::Version) => Ok(Parsed::Version),
        Err(Stop::Failed(err)) => Err(err),
    }
}

/// The usage block printed for `--help` and after usage errors.
pub fn usage() -> String {
    let kinds = PackageKind::ALL
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join("|");

    format!(
        "Usage: {BIN_NAME} <name> [--type <{kinds}>]
       {BIN_NAME} <name> [--description \"<text>\"]

Options:
      --type <kind>          Package kind (default: node-lib)
      --description <text>   Description for package.json and README.md
      --dry-run              List the files that would be created
      --config <file>        Extra configuration file (TOML)
  -v, --verbose              Increase log verbosity (-v, -vv, -vvv)
  -q, --quiet                Suppress non-error output
      --no-color             Disable colored output
  -h, --help                 Show this help
  -V, --version              Show version

Examples:
  {BIN_NAME} logger
  {BIN_NAME} ui --type react-library
  {BIN_NAME} commitlint-config --type config-only
"
    )
}
