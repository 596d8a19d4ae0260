//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.
//! The CLI layer owns config; the core crate only ever sees the
//! [`WorkspaceConventions`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `SCAFFKIT_*` environment variables (`SCAFFKIT_WORKSPACE__SCOPE`)
//! 2. The file passed with `--config`
//! 3. `scaffkit.toml` in the workspace root
//! 4. `config.toml` in the user config directory
//! 5. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use scaffkit_adapters::EnvLoader;
use scaffkit_core::domain::{
    EnvField, EnvRule, EnvSchema, ValidatedEnv, WorkspaceConventions, is_valid_identifier,
};

use crate::error::{CliError, CliResult};

pub const ENV_PREFIX: &str = "SCAFFKIT";
pub const WORKSPACE_FILE: &str = "scaffkit.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub workspace: WorkspaceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Directory, relative to the workspace root, that holds packages.
    pub packages_dir: PathBuf,
    /// npm scope without the `@`.
    pub scope: String,
    /// Full `packageManager` string, e.g. `pnpm@10.13.1`.
    pub package_manager: String,
    /// `engines.node` range.
    pub node_engine: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        let conventions = WorkspaceConventions::default();
        Self {
            packages_dir: PathBuf::from("packages"),
            scope: conventions.scope,
            package_manager: conventions.package_manager,
            node_engine: conventions.node_engine,
        }
    }
}

impl AppConfig {
    /// Load configuration for a workspace rooted at `cwd`.
    ///
    /// `explicit` is the path passed via `--config`; unlike the other
    /// files it must exist.
    pub fn load(cwd: &Path, explicit: Option<&Path>) -> CliResult<Self> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default(
                "workspace.packages_dir",
                defaults.workspace.packages_dir.to_string_lossy().into_owned(),
            )?
            .set_default("workspace.scope", defaults.workspace.scope)?
            .set_default("workspace.package_manager", defaults.workspace.package_manager)?
            .set_default("workspace.node_engine", defaults.workspace.node_engine)?
            .set_default("output.no_color", defaults.output.no_color)?;

        if let Some(user) = Self::user_config_path() {
            debug!(path = %user.display(), "User config candidate");
            builder = builder.add_source(File::from(user).required(false));
        }

        builder = builder.add_source(File::from(cwd.join(WORKSPACE_FILE)).required(false));

        if let Some(path) = explicit {
            let path = if path.is_absolute() {
                path.to_path_buf()
            } else {
                cwd.join(path)
            };
            debug!(path = %path.display(), "Explicit config file");
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the generated files could not use.
    pub fn validate(&self) -> CliResult<()> {
        if !is_valid_identifier(&self.workspace.scope) {
            return Err(CliError::config(format!(
                "workspace.scope \"{}\" must be kebab-case (letters, numbers, dashes)",
                self.workspace.scope
            )));
        }
        if self.workspace.packages_dir.as_os_str().is_empty() {
            return Err(CliError::config("workspace.packages_dir must not be empty"));
        }
        if self.workspace.package_manager.trim().is_empty() {
            return Err(CliError::config("workspace.package_manager must not be empty"));
        }
        Ok(())
    }

    pub fn conventions(&self) -> WorkspaceConventions {
        WorkspaceConventions {
            scope: self.workspace.scope.clone(),
            package_manager: self.workspace.package_manager.clone(),
            node_engine: self.workspace.node_engine.clone(),
        }
    }

    /// Path to the per-user configuration file.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "scaffkit", "scaffkit")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

/// Variables the tool reads from the process environment after `.env`
/// layering.
pub fn environment_schema() -> EnvSchema {
    EnvSchema::new()
        .field(EnvField::optional(
            "SCAFFKIT_WORKSPACE__SCOPE",
            EnvRule::Identifier,
        ))
        .field(EnvField::optional(
            "SCAFFKIT_WORKSPACE__PACKAGES_DIR",
            EnvRule::NonEmpty,
        ))
        .field(EnvField::optional(
            "SCAFFKIT_OUTPUT__NO_COLOR",
            EnvRule::Boolean,
        ))
}

/// Apply the workspace's `.env` layers and validate the result.
pub fn load_environment(cwd: &Path) -> CliResult<ValidatedEnv> {
    Ok(EnvLoader::new(cwd).load(&environment_schema())?)
}
