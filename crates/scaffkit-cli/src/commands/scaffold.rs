//! Scaffold a new workspace package.
//!
//! Responsibility: turn the raw invocation into a validated request, call
//! the core scaffold service, and report what happened. No business logic
//! lives here.

use std::path::Path;

use tracing::{debug, info, instrument};

use scaffkit_core::{
    application::{Filesystem, ScaffoldService},
    domain::{
        DomainValidator, GeneratedFileSet, PackageKind, ScaffoldRequest, TargetDirectory,
        TemplateRegistry, WorkspaceConventions,
    },
    error::ScaffoldError,
};

use crate::{
    cli::Invocation,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a validated request against `filesystem`.
///
/// Sequence:
/// 1. Resolve the target under the configured packages directory
/// 2. Dry run: list the planned files and stop
/// 3. Generate and materialize
/// 4. Print the confirmation and next steps
#[instrument(skip_all, fields(package = %request.name(), kind = %request.kind()))]
pub fn execute(
    request: &ScaffoldRequest,
    dry_run: bool,
    cwd: &Path,
    config: &AppConfig,
    filesystem: Box<dyn Filesystem>,
    output: &OutputManager,
) -> CliResult<()> {
    let target = TargetDirectory::new(cwd, &config.workspace.packages_dir, request.name());
    debug!(target = %target.path().display(), "Target resolved");

    let service = ScaffoldService::new(TemplateRegistry::new(config.conventions()), filesystem);

    if dry_run {
        let files = service.plan(request, &target)?;
        return report_dry_run(&target, request.kind(), &files, output);
    }

    let outcome = service.scaffold(request, &target)?;
    info!(files = outcome.written.len(), "Package created");

    output.success(&confirmation(&outcome.target, outcome.kind))?;
    output.header("Next steps:")?;
    for step in next_steps(&outcome.target, outcome.kind, service.registry().conventions()) {
        output.print(&step)?;
    }

    Ok(())
}

/// `Created packages/<name> (<kind>).`
pub fn confirmation(target: &TargetDirectory, kind: PackageKind) -> String {
    format!("Created {} ({kind}).", target.display())
}

/// Name first, then kind; the first failure wins.
pub fn resolve_request(invocation: &Invocation) -> CliResult<ScaffoldRequest> {
    let name = invocation.name.as_deref().ok_or(CliError::MissingName)?;
    DomainValidator::validate_request(name, &invocation.kind, invocation.description.clone())
        .map_err(|e| CliError::Core(ScaffoldError::from(e)))
}

fn report_dry_run(
    target: &TargetDirectory,
    kind: PackageKind,
    files: &GeneratedFileSet,
    output: &OutputManager,
) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would create {} ({}) with {} files",
        target.display(),
        kind,
        files.len()
    ))?;
    for path in files.paths() {
        output.print(&format!("  {}", target.relative().join(path).display()))?;
    }
    Ok(())
}

/// Numbered follow-up commands. Kinds without a build step get editing
/// hints instead of lint/typecheck/build.
pub fn next_steps(
    target: &TargetDirectory,
    kind: PackageKind,
    conventions: &WorkspaceConventions,
) -> Vec<String> {
    let pm = conventions.package_manager_bin();
    let dir = target.display();

    let mut steps = vec![
        "Review generated metadata and exports".to_string(),
        format!("{pm} install"),
    ];

    if kind.has_build_step() {
        steps.push(format!("{pm} -C {dir} lint"));
        steps.push(format!("{pm} -C {dir} check-types"));
        steps.push(format!("{pm} -C {dir} build"));
    } else {
        steps.push(format!(
            "Customize {}/index.js (or replace with your config file layout)",
            dir
        ));
        steps.push(format!("Update {dir}/README.md"));
    }

    steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| format!("{}) {step}", i + 1))
        .collect()
}
