//! # scaffold-package
//!
//! Creates a new package inside a pnpm/turbo monorepo.
//!
//! ## Startup sequence
//!
//! 1. Fold the arguments into an invocation (`--help` / `--version` exit early).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Validate the package name, then the kind.
//! 4. Apply and validate the workspace `.env` layers.
//! 5. Load configuration (defaults + files + `SCAFFKIT_*` env).
//! 6. Build the [`OutputManager`].
//! 7. Scaffold.
//! 8. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success                                  |
//! |  1   | Usage error, invalid input, target exists |
//! |  70  | Internal error                           |
//! |  74  | Filesystem error                         |
//! |  78  | Configuration or environment error       |

use std::io::IsTerminal as _;
use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, info, instrument};

use scaffkit_adapters::LocalFilesystem;
use scaffkit_core::domain::ScaffoldRequest;

use crate::{
    cli::{BIN_NAME, Invocation, Parsed},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let invocation = match cli::parse_args(&args) {
        Ok(Parsed::Run(invocation)) => invocation,
        Ok(Parsed::Help) => {
            print!("{}", cli::usage());
            return ExitCode::SUCCESS;
        }
        Ok(Parsed::Version) => {
            println!("{BIN_NAME} {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => return handle_error(CliError::from(e), false, false),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&invocation.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(70);
    }

    debug!(
        verbose = invocation.global.verbose,
        quiet = invocation.global.quiet,
        no_color = invocation.global.no_color,
        "CLI started"
    );

    let verbose = invocation.global.verbose > 0;
    let no_color = invocation.global.no_color;

    // ── 3. Validate the request before touching env files or config ───────
    let request = match commands::scaffold::resolve_request(&invocation) {
        Ok(request) => request,
        Err(e) => return handle_error(e, verbose, no_color),
    };

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => return handle_error(CliError::from(e), verbose, no_color),
    };

    // ── 4-7. Load environment and config, then scaffold ───────────────────
    match run(&invocation, &request, &cwd) {
        Ok(()) => {
            info!("scaffold-package completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

#[instrument(skip_all, fields(cwd = %cwd.display()))]
fn run(invocation: &Invocation, request: &ScaffoldRequest, cwd: &Path) -> CliResult<()> {
    let env = config::load_environment(cwd)?;
    debug!(validated = env.len(), "Environment loaded");

    let config = AppConfig::load(cwd, invocation.global.config.as_deref())?;
    let output = OutputManager::new(&invocation.global, &config);

    commands::scaffold::execute(
        request,
        invocation.dry_run,
        cwd,
        &config,
        Box::new(LocalFilesystem::new()),
        &output,
    )
}

/// Translate a `CliError` into a user message on stderr and an exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let colored = !no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stderr().is_terminal();
    let msg = if colored {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
